// Studio::EventDescription / Studio::EventInstance 래퍼

use std::ffi::CString;
use std::rc::Rc;

use crate::catalog::Bridge;
use crate::error::Error;
use crate::ffi::types::{
    EventDescriptionHandle, EventInstanceHandle, EventProperty, PlaybackState, StopMode,
};
use crate::marshal::Attributes3d;

#[derive(Clone)]
pub struct EventDescription {
    bridge: Rc<Bridge>,
    handle: EventDescriptionHandle,
}

impl EventDescription {
    pub(crate) fn new(bridge: Rc<Bridge>, handle: EventDescriptionHandle) -> Self {
        Self { bridge, handle }
    }

    pub fn handle(&self) -> EventDescriptionHandle {
        self.handle
    }

    pub fn get_path(&self) -> Result<String, Error> {
        self.bridge
            .Studio_EventDescription_GetPath(self.handle)
            .into_result("Studio_EventDescription_GetPath")
    }

    pub fn create_instance(&self) -> Result<EventInstance, Error> {
        let handle = self
            .bridge
            .Studio_EventDescription_CreateInstance(self.handle)
            .into_result("Studio_EventDescription_CreateInstance")?;
        Ok(EventInstance::new(Rc::clone(&self.bridge), handle))
    }

    pub fn get_instance_count(&self) -> Result<i32, Error> {
        self.bridge
            .Studio_EventDescription_GetInstanceCount(self.handle)
            .into_result("Studio_EventDescription_GetInstanceCount")
    }

    pub fn get_instance_list(&self) -> Result<Vec<EventInstance>, Error> {
        let capacity = self.get_instance_count()?;
        let handles = self
            .bridge
            .Studio_EventDescription_GetInstanceList(self.handle, capacity)
            .into_result("Studio_EventDescription_GetInstanceList")?;
        Ok(handles
            .into_iter()
            .map(|handle| EventInstance::new(Rc::clone(&self.bridge), handle))
            .collect())
    }

    pub fn release_all_instances(&self) -> Result<(), Error> {
        self.bridge
            .Studio_EventDescription_ReleaseAllInstances(self.handle)
            .into_result("Studio_EventDescription_ReleaseAllInstances")
    }

    pub fn is_3d(&self) -> Result<bool, Error> {
        self.bridge
            .Studio_EventDescription_Is3D(self.handle)
            .into_result("Studio_EventDescription_Is3D")
    }
}

#[derive(Clone)]
pub struct EventInstance {
    bridge: Rc<Bridge>,
    handle: EventInstanceHandle,
}

impl EventInstance {
    pub(crate) fn new(bridge: Rc<Bridge>, handle: EventInstanceHandle) -> Self {
        Self { bridge, handle }
    }

    pub fn handle(&self) -> EventInstanceHandle {
        self.handle
    }

    pub fn get_description(&self) -> Result<EventDescription, Error> {
        let handle = self
            .bridge
            .Studio_EventInstance_GetDescription(self.handle)
            .into_result("Studio_EventInstance_GetDescription")?;
        Ok(EventDescription::new(Rc::clone(&self.bridge), handle))
    }

    pub fn start(&self) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_Start(self.handle)
            .into_result("Studio_EventInstance_Start")
    }

    pub fn stop(&self, mode: StopMode) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_Stop(self.handle, mode)
            .into_result("Studio_EventInstance_Stop")
    }

    /// 재생이 끝나면 엔진이 파괴한다
    pub fn release(&self) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_Release(self.handle)
            .into_result("Studio_EventInstance_Release")
    }

    pub fn get_3d_attributes(&self) -> Result<Attributes3d, Error> {
        self.bridge
            .Studio_EventInstance_Get3DAttributes(self.handle)
            .into_result("Studio_EventInstance_Get3DAttributes")
    }

    pub fn set_3d_attributes(&self, attributes: &Attributes3d) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_Set3DAttributes(self.handle, attributes)
            .into_result("Studio_EventInstance_Set3DAttributes")
    }

    /// (pitch, final pitch)
    pub fn get_pitch(&self) -> Result<(f32, f32), Error> {
        self.bridge
            .Studio_EventInstance_GetPitch(self.handle)
            .into_result("Studio_EventInstance_GetPitch")
    }

    pub fn set_pitch(&self, pitch: f32) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_SetPitch(self.handle, pitch)
            .into_result("Studio_EventInstance_SetPitch")
    }

    pub fn get_property(&self, index: EventProperty) -> Result<f32, Error> {
        self.bridge
            .Studio_EventInstance_GetProperty(self.handle, index)
            .into_result("Studio_EventInstance_GetProperty")
    }

    pub fn set_property(&self, index: EventProperty, value: f32) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_SetProperty(self.handle, index, value)
            .into_result("Studio_EventInstance_SetProperty")
    }

    /// 밀리초
    pub fn get_timeline_position(&self) -> Result<i32, Error> {
        self.bridge
            .Studio_EventInstance_GetTimelinePosition(self.handle)
            .into_result("Studio_EventInstance_GetTimelinePosition")
    }

    pub fn set_timeline_position(&self, position: i32) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_SetTimelinePosition(self.handle, position)
            .into_result("Studio_EventInstance_SetTimelinePosition")
    }

    /// (volume, final volume)
    pub fn get_volume(&self) -> Result<(f32, f32), Error> {
        self.bridge
            .Studio_EventInstance_GetVolume(self.handle)
            .into_result("Studio_EventInstance_GetVolume")
    }

    pub fn set_volume(&self, volume: f32) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_SetVolume(self.handle, volume)
            .into_result("Studio_EventInstance_SetVolume")
    }

    pub fn is_virtual(&self) -> Result<bool, Error> {
        self.bridge
            .Studio_EventInstance_IsVirtual(self.handle)
            .into_result("Studio_EventInstance_IsVirtual")
    }

    /// (value, final value)
    pub fn get_parameter_by_name(&self, name: &str) -> Result<(f32, f32), Error> {
        let name = CString::new(name)?;
        self.bridge
            .Studio_EventInstance_GetParameterByName(self.handle, &name)
            .into_result("Studio_EventInstance_GetParameterByName")
    }

    pub fn set_parameter_by_name(
        &self,
        name: &str,
        value: f32,
        ignore_seek_speed: bool,
    ) -> Result<(), Error> {
        let name = CString::new(name)?;
        self.bridge
            .Studio_EventInstance_SetParameterByName(self.handle, &name, value, ignore_seek_speed)
            .into_result("Studio_EventInstance_SetParameterByName")
    }

    pub fn get_paused(&self) -> Result<bool, Error> {
        self.bridge
            .Studio_EventInstance_GetPaused(self.handle)
            .into_result("Studio_EventInstance_GetPaused")
    }

    pub fn set_paused(&self, paused: bool) -> Result<(), Error> {
        self.bridge
            .Studio_EventInstance_SetPaused(self.handle, paused)
            .into_result("Studio_EventInstance_SetPaused")
    }

    pub fn get_playback_state(&self) -> Result<PlaybackState, Error> {
        self.bridge
            .Studio_EventInstance_GetPlaybackState(self.handle)
            .into_result("Studio_EventInstance_GetPlaybackState")
    }
}
