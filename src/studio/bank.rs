// Studio::Bank 래퍼

use std::rc::Rc;

use crate::catalog::Bridge;
use crate::error::Error;
use crate::ffi::types::BankHandle;

use super::EventDescription;

#[derive(Clone)]
pub struct Bank {
    bridge: Rc<Bridge>,
    handle: BankHandle,
}

impl Bank {
    pub(crate) fn new(bridge: Rc<Bridge>, handle: BankHandle) -> Self {
        Self { bridge, handle }
    }

    pub fn handle(&self) -> BankHandle {
        self.handle
    }

    pub fn get_path(&self) -> Result<String, Error> {
        self.bridge
            .Studio_Bank_GetPath(self.handle)
            .into_result("Studio_Bank_GetPath")
    }

    pub fn get_event_count(&self) -> Result<i32, Error> {
        self.bridge
            .Studio_Bank_GetEventCount(self.handle)
            .into_result("Studio_Bank_GetEventCount")
    }

    pub fn get_event_list(&self) -> Result<Vec<EventDescription>, Error> {
        let capacity = self.get_event_count()?;
        let handles = self
            .bridge
            .Studio_Bank_GetEventList(self.handle, capacity)
            .into_result("Studio_Bank_GetEventList")?;
        Ok(handles
            .into_iter()
            .map(|handle| EventDescription::new(Rc::clone(&self.bridge), handle))
            .collect())
    }

    pub fn unload(&self) -> Result<(), Error> {
        self.bridge
            .Studio_Bank_Unload(self.handle)
            .into_result("Studio_Bank_Unload")
    }
}
