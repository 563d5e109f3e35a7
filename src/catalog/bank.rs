// Studio::Bank 어댑터

use libc::c_int;

use super::Bridge;
use crate::ffi::types::{BankHandle, EventDescriptionHandle};
use crate::marshal::{collect_list, retrieve_string, ListResult, StringResult};

adapters! {
    fn Studio_Bank_GetEventCount(bank: BankHandle) -> Value<c_int> = bank_get_event_count;
    /// 해당 뱅크의 이벤트 설명/인스턴스 핸들도 무효가 된다
    fn Studio_Bank_Unload(bank: BankHandle) -> Status = bank_unload;
}

#[allow(non_snake_case)]
impl Bridge {
    pub fn Studio_Bank_GetPath(&self, bank: BankHandle) -> StringResult {
        let path = retrieve_string(|buffer, size, retrieved| unsafe {
            (self.api.bank_get_path)(bank, buffer, size, retrieved)
        });
        self.observe("Studio_Bank_GetPath", path.status().code());
        path
    }

    pub fn Studio_Bank_GetEventList(
        &self,
        bank: BankHandle,
        capacity: c_int,
    ) -> ListResult<EventDescriptionHandle> {
        let list = collect_list(capacity, |array, capacity, count| unsafe {
            (self.api.bank_get_event_list)(bank, array, capacity, count)
        });
        self.observe("Studio_Bank_GetEventList", list.status().code());
        list
    }
}
