// Studio::System 어댑터

use std::ffi::CStr;

use libc::{c_char, c_int};

use super::Bridge;
use crate::ffi::types::{
    BankHandle, BusHandle, EventDescriptionHandle, Init, LoadBank, LoadMemoryMode, StudioInit,
    SystemHandle, FMOD_ERR_INVALID_PARAM,
};
use crate::marshal::{
    collect_list, Attributes3d, IntoNative, ListResult, Slot, StatusResult, ValueResult, Vector,
};

adapters! {
    fn Studio_System_Release(system: SystemHandle) -> Status = system_release;
    /// 프레임마다 호출해야 한다
    fn Studio_System_Update(system: SystemHandle) -> Status = system_update;
    fn Studio_System_UnloadAll(system: SystemHandle) -> Status = system_unload_all;
    fn Studio_System_GetEvent(system: SystemHandle, path: &CStr) -> Value<EventDescriptionHandle> = system_get_event;
    fn Studio_System_GetBus(system: SystemHandle, path: &CStr) -> Value<BusHandle> = system_get_bus;
    fn Studio_System_SetParameterByName(system: SystemHandle, name: &CStr, value: f32, ignore_seek_speed: bool) -> Status = system_set_parameter_by_name;
    /// (value, final value)
    fn Studio_System_GetParameterByName(system: SystemHandle, name: &CStr) -> Pair<f32, f32> = system_get_parameter_by_name;
    /// 입력은 중첩 구조체 그대로 넘긴다
    fn Studio_System_SetListenerAttributes(system: SystemHandle, listener: c_int, attributes: &Attributes3d, attenuation_position: Option<&Vector>) -> Status = system_set_listener_attributes;
    /// (attributes, attenuation position). attributes는 평탄화된 필드에서 재구성
    fn Studio_System_GetListenerAttributes(system: SystemHandle, listener: c_int) -> Pair<Attributes3d, Vector> = system_get_listener_attributes;
    fn Studio_System_GetBankCount(system: SystemHandle) -> Value<c_int> = system_get_bank_count;
}

#[allow(non_snake_case)]
impl Bridge {
    /// out-parameter가 첫 번째 인자
    pub fn Studio_System_Create(&self, header_version: u32) -> ValueResult<SystemHandle> {
        let mut system = Slot::<SystemHandle>::new();
        let status = unsafe { (self.api.system_create)(system.as_mut_ptr(), header_version) };
        ValueResult::from_slot(self.observe("Studio_System_Create", status), system)
    }

    /// extradriverdata는 항상 null
    pub fn Studio_System_Initialize(
        &self,
        system: SystemHandle,
        max_channels: c_int,
        studio_flags: StudioInit,
        flags: Init,
    ) -> StatusResult {
        let status = unsafe {
            (self.api.system_initialize)(
                system,
                max_channels,
                studio_flags.into_native(),
                flags.into_native(),
                std::ptr::null_mut(),
            )
        };
        StatusResult::new(self.observe("Studio_System_Initialize", status))
    }

    /// 뱅크 바이트는 (buffer, length) 대신 슬라이스로 받는다.
    /// 엔진이 복사하도록 항상 `LoadMemoryMode::Memory`로 호출한다.
    pub fn Studio_System_LoadBankMemory(
        &self,
        system: SystemHandle,
        buffer: &[u8],
        flags: LoadBank,
    ) -> ValueResult<BankHandle> {
        let length = match c_int::try_from(buffer.len()) {
            Ok(length) => length,
            Err(_) => {
                // 길이를 표현할 수 없으면 엔진을 호출하지 않는다
                log::warn!(
                    "bank buffer of {} bytes exceeds the native length range",
                    buffer.len()
                );
                let status = self.observe("Studio_System_LoadBankMemory", FMOD_ERR_INVALID_PARAM);
                return ValueResult::failed(status);
            }
        };

        let mut bank = Slot::<BankHandle>::new();
        let status = unsafe {
            (self.api.system_load_bank_memory)(
                system,
                buffer.as_ptr().cast::<c_char>(),
                length,
                LoadMemoryMode::Memory as c_int,
                flags.into_native(),
                bank.as_mut_ptr(),
            )
        };
        ValueResult::from_slot(self.observe("Studio_System_LoadBankMemory", status), bank)
    }

    pub fn Studio_System_GetBankList(
        &self,
        system: SystemHandle,
        capacity: c_int,
    ) -> ListResult<BankHandle> {
        let list = collect_list(capacity, |array, capacity, count| unsafe {
            (self.api.system_get_bank_list)(system, array, capacity, count)
        });
        self.observe("Studio_System_GetBankList", list.status().code());
        list
    }
}
