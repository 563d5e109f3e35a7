// Studio::System 래퍼

use std::ffi::CString;
use std::rc::Rc;

use crate::catalog::Bridge;
use crate::error::Error;
use crate::ffi::types::{Init, LoadBank, StudioInit, SystemHandle};
use crate::marshal::{Attributes3d, Vector};

use super::{Bank, Bus, EventDescription};

/// 엔진 시스템
#[derive(Clone)]
pub struct Studio {
    bridge: Rc<Bridge>,
    handle: SystemHandle,
}

impl Studio {
    /// 설정의 헤더 버전으로 시스템 생성
    pub fn create(bridge: Rc<Bridge>) -> Result<Self, Error> {
        let handle = bridge
            .Studio_System_Create(bridge.config().header_version)
            .into_result("Studio_System_Create")?;
        log::debug!("studio system created: {:?}", handle);
        Ok(Self { bridge, handle })
    }

    pub fn handle(&self) -> SystemHandle {
        self.handle
    }

    pub fn initialize(
        &self,
        max_channels: i32,
        studio_flags: StudioInit,
        flags: Init,
    ) -> Result<(), Error> {
        self.bridge
            .Studio_System_Initialize(self.handle, max_channels, studio_flags, flags)
            .into_result("Studio_System_Initialize")
    }

    pub fn release(&self) -> Result<(), Error> {
        self.bridge
            .Studio_System_Release(self.handle)
            .into_result("Studio_System_Release")
    }

    pub fn update(&self) -> Result<(), Error> {
        self.bridge
            .Studio_System_Update(self.handle)
            .into_result("Studio_System_Update")
    }

    pub fn load_bank_memory(&self, buffer: &[u8], flags: LoadBank) -> Result<Bank, Error> {
        let handle = self
            .bridge
            .Studio_System_LoadBankMemory(self.handle, buffer, flags)
            .into_result("Studio_System_LoadBankMemory")?;
        Ok(Bank::new(Rc::clone(&self.bridge), handle))
    }

    pub fn unload_all(&self) -> Result<(), Error> {
        self.bridge
            .Studio_System_UnloadAll(self.handle)
            .into_result("Studio_System_UnloadAll")
    }

    pub fn get_event(&self, path: &str) -> Result<EventDescription, Error> {
        let path = CString::new(path)?;
        let handle = self
            .bridge
            .Studio_System_GetEvent(self.handle, &path)
            .into_result("Studio_System_GetEvent")?;
        Ok(EventDescription::new(Rc::clone(&self.bridge), handle))
    }

    pub fn get_bus(&self, path: &str) -> Result<Bus, Error> {
        let path = CString::new(path)?;
        let handle = self
            .bridge
            .Studio_System_GetBus(self.handle, &path)
            .into_result("Studio_System_GetBus")?;
        Ok(Bus::new(Rc::clone(&self.bridge), handle))
    }

    pub fn set_parameter_by_name(
        &self,
        name: &str,
        value: f32,
        ignore_seek_speed: bool,
    ) -> Result<(), Error> {
        let name = CString::new(name)?;
        self.bridge
            .Studio_System_SetParameterByName(self.handle, &name, value, ignore_seek_speed)
            .into_result("Studio_System_SetParameterByName")
    }

    /// (value, final value)
    pub fn get_parameter_by_name(&self, name: &str) -> Result<(f32, f32), Error> {
        let name = CString::new(name)?;
        self.bridge
            .Studio_System_GetParameterByName(self.handle, &name)
            .into_result("Studio_System_GetParameterByName")
    }

    pub fn set_listener_attributes(
        &self,
        listener: i32,
        attributes: &Attributes3d,
        attenuation_position: Option<Vector>,
    ) -> Result<(), Error> {
        self.bridge
            .Studio_System_SetListenerAttributes(
                self.handle,
                listener,
                attributes,
                attenuation_position.as_ref(),
            )
            .into_result("Studio_System_SetListenerAttributes")
    }

    /// (attributes, attenuation position)
    pub fn get_listener_attributes(&self, listener: i32) -> Result<(Attributes3d, Vector), Error> {
        self.bridge
            .Studio_System_GetListenerAttributes(self.handle, listener)
            .into_result("Studio_System_GetListenerAttributes")
    }

    pub fn get_bank_count(&self) -> Result<i32, Error> {
        self.bridge
            .Studio_System_GetBankCount(self.handle)
            .into_result("Studio_System_GetBankCount")
    }

    /// 현재 개수를 용량으로 사용
    pub fn get_bank_list(&self) -> Result<Vec<Bank>, Error> {
        let capacity = self.get_bank_count()?;
        let handles = self
            .bridge
            .Studio_System_GetBankList(self.handle, capacity)
            .into_result("Studio_System_GetBankList")?;
        Ok(handles
            .into_iter()
            .map(|handle| Bank::new(Rc::clone(&self.bridge), handle))
            .collect())
    }
}
