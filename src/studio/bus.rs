// Studio::Bus 래퍼

use std::rc::Rc;

use crate::catalog::Bridge;
use crate::error::Error;
use crate::ffi::types::{BusHandle, StopMode};

#[derive(Clone)]
pub struct Bus {
    bridge: Rc<Bridge>,
    handle: BusHandle,
}

impl Bus {
    pub(crate) fn new(bridge: Rc<Bridge>, handle: BusHandle) -> Self {
        Self { bridge, handle }
    }

    pub fn handle(&self) -> BusHandle {
        self.handle
    }

    pub fn get_path(&self) -> Result<String, Error> {
        self.bridge
            .Studio_Bus_GetPath(self.handle)
            .into_result("Studio_Bus_GetPath")
    }

    pub fn set_mute(&self, mute: bool) -> Result<(), Error> {
        self.bridge
            .Studio_Bus_SetMute(self.handle, mute)
            .into_result("Studio_Bus_SetMute")
    }

    pub fn get_mute(&self) -> Result<bool, Error> {
        self.bridge
            .Studio_Bus_GetMute(self.handle)
            .into_result("Studio_Bus_GetMute")
    }

    pub fn set_paused(&self, paused: bool) -> Result<(), Error> {
        self.bridge
            .Studio_Bus_SetPaused(self.handle, paused)
            .into_result("Studio_Bus_SetPaused")
    }

    pub fn get_paused(&self) -> Result<bool, Error> {
        self.bridge
            .Studio_Bus_GetPaused(self.handle)
            .into_result("Studio_Bus_GetPaused")
    }

    pub fn set_volume(&self, volume: f32) -> Result<(), Error> {
        self.bridge
            .Studio_Bus_SetVolume(self.handle, volume)
            .into_result("Studio_Bus_SetVolume")
    }

    /// (volume, final volume)
    pub fn get_volume(&self) -> Result<(f32, f32), Error> {
        self.bridge
            .Studio_Bus_GetVolume(self.handle)
            .into_result("Studio_Bus_GetVolume")
    }

    pub fn stop_all_events(&self, mode: StopMode) -> Result<(), Error> {
        self.bridge
            .Studio_Bus_StopAllEvents(self.handle, mode)
            .into_result("Studio_Bus_StopAllEvents")
    }
}
