// Studio::EventDescription 어댑터

use libc::c_int;

use super::Bridge;
use crate::ffi::types::{EventDescriptionHandle, EventInstanceHandle};
use crate::marshal::{collect_list, retrieve_string, ListResult, StringResult};

adapters! {
    fn Studio_EventDescription_CreateInstance(description: EventDescriptionHandle) -> Value<EventInstanceHandle> = event_description_create_instance;
    fn Studio_EventDescription_GetInstanceCount(description: EventDescriptionHandle) -> Value<c_int> = event_description_get_instance_count;
    fn Studio_EventDescription_ReleaseAllInstances(description: EventDescriptionHandle) -> Status = event_description_release_all_instances;
    fn Studio_EventDescription_Is3D(description: EventDescriptionHandle) -> Value<bool> = event_description_is_3d;
}

#[allow(non_snake_case)]
impl Bridge {
    pub fn Studio_EventDescription_GetPath(
        &self,
        description: EventDescriptionHandle,
    ) -> StringResult {
        let path = retrieve_string(|buffer, size, retrieved| unsafe {
            (self.api.event_description_get_path)(description, buffer, size, retrieved)
        });
        self.observe("Studio_EventDescription_GetPath", path.status().code());
        path
    }

    pub fn Studio_EventDescription_GetInstanceList(
        &self,
        description: EventDescriptionHandle,
        capacity: c_int,
    ) -> ListResult<EventInstanceHandle> {
        let list = collect_list(capacity, |array, capacity, count| unsafe {
            (self.api.event_description_get_instance_list)(description, array, capacity, count)
        });
        self.observe(
            "Studio_EventDescription_GetInstanceList",
            list.status().code(),
        );
        list
    }
}
