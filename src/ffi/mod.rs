// FFI (Foreign Function Interface) 모듈
// 네이티브 엔진의 C 호출 표면. 필드 하나가 진입점 하나이며 인자 순서는 C 시그니처 그대로다.

pub mod types;

#[cfg(feature = "link-fmod")]
mod linked;

#[cfg(test)]
pub(crate) mod fake;

use libc::{c_char, c_int, c_uint, c_void};

use crate::marshal::{Attributes3d, FlatAttributes3d, Vector};
use types::{
    BankHandle, BusHandle, EventDescriptionHandle, EventInstanceHandle, FmodBool, SystemHandle,
};

/// 네이티브 진입점 테이블
///
/// 반환값은 모두 FMOD_RESULT. `*mut` 인자는 out-parameter.
/// 실제 엔진에 링크하려면 `link-fmod` 피처의 [`NativeApi::linked`]를 쓴다.
#[derive(Clone, Copy)]
pub struct NativeApi {
    // Studio::System
    pub system_create: unsafe extern "C" fn(*mut SystemHandle, c_uint) -> c_int,
    pub system_initialize:
        unsafe extern "C" fn(SystemHandle, c_int, c_uint, c_uint, *mut c_void) -> c_int,
    pub system_release: unsafe extern "C" fn(SystemHandle) -> c_int,
    pub system_update: unsafe extern "C" fn(SystemHandle) -> c_int,
    pub system_load_bank_memory: unsafe extern "C" fn(
        SystemHandle,
        *const c_char,
        c_int,
        c_int,
        c_uint,
        *mut BankHandle,
    ) -> c_int,
    pub system_unload_all: unsafe extern "C" fn(SystemHandle) -> c_int,
    pub system_get_event:
        unsafe extern "C" fn(SystemHandle, *const c_char, *mut EventDescriptionHandle) -> c_int,
    pub system_get_bus: unsafe extern "C" fn(SystemHandle, *const c_char, *mut BusHandle) -> c_int,
    pub system_set_parameter_by_name:
        unsafe extern "C" fn(SystemHandle, *const c_char, f32, FmodBool) -> c_int,
    pub system_get_parameter_by_name:
        unsafe extern "C" fn(SystemHandle, *const c_char, *mut f32, *mut f32) -> c_int,
    pub system_set_listener_attributes:
        unsafe extern "C" fn(SystemHandle, c_int, *const Attributes3d, *const Vector) -> c_int,
    /// getter는 평탄화된 필드로 쓴다 (setter와 비대칭)
    pub system_get_listener_attributes:
        unsafe extern "C" fn(SystemHandle, c_int, *mut FlatAttributes3d, *mut Vector) -> c_int,
    pub system_get_bank_count: unsafe extern "C" fn(SystemHandle, *mut c_int) -> c_int,
    pub system_get_bank_list:
        unsafe extern "C" fn(SystemHandle, *mut BankHandle, c_int, *mut c_int) -> c_int,

    // Studio::Bank
    pub bank_get_path: unsafe extern "C" fn(BankHandle, *mut c_char, c_int, *mut c_int) -> c_int,
    pub bank_get_event_count: unsafe extern "C" fn(BankHandle, *mut c_int) -> c_int,
    pub bank_get_event_list:
        unsafe extern "C" fn(BankHandle, *mut EventDescriptionHandle, c_int, *mut c_int) -> c_int,
    pub bank_unload: unsafe extern "C" fn(BankHandle) -> c_int,

    // Studio::EventDescription
    pub event_description_get_path:
        unsafe extern "C" fn(EventDescriptionHandle, *mut c_char, c_int, *mut c_int) -> c_int,
    pub event_description_create_instance:
        unsafe extern "C" fn(EventDescriptionHandle, *mut EventInstanceHandle) -> c_int,
    pub event_description_get_instance_count:
        unsafe extern "C" fn(EventDescriptionHandle, *mut c_int) -> c_int,
    pub event_description_get_instance_list: unsafe extern "C" fn(
        EventDescriptionHandle,
        *mut EventInstanceHandle,
        c_int,
        *mut c_int,
    ) -> c_int,
    pub event_description_release_all_instances:
        unsafe extern "C" fn(EventDescriptionHandle) -> c_int,
    pub event_description_is_3d:
        unsafe extern "C" fn(EventDescriptionHandle, *mut FmodBool) -> c_int,

    // Studio::EventInstance
    pub event_instance_get_description:
        unsafe extern "C" fn(EventInstanceHandle, *mut EventDescriptionHandle) -> c_int,
    pub event_instance_start: unsafe extern "C" fn(EventInstanceHandle) -> c_int,
    pub event_instance_stop: unsafe extern "C" fn(EventInstanceHandle, c_int) -> c_int,
    pub event_instance_release: unsafe extern "C" fn(EventInstanceHandle) -> c_int,
    pub event_instance_get_3d_attributes:
        unsafe extern "C" fn(EventInstanceHandle, *mut FlatAttributes3d) -> c_int,
    pub event_instance_set_3d_attributes:
        unsafe extern "C" fn(EventInstanceHandle, *const Attributes3d) -> c_int,
    pub event_instance_get_pitch:
        unsafe extern "C" fn(EventInstanceHandle, *mut f32, *mut f32) -> c_int,
    pub event_instance_set_pitch: unsafe extern "C" fn(EventInstanceHandle, f32) -> c_int,
    pub event_instance_get_property:
        unsafe extern "C" fn(EventInstanceHandle, c_int, *mut f32) -> c_int,
    pub event_instance_set_property: unsafe extern "C" fn(EventInstanceHandle, c_int, f32) -> c_int,
    pub event_instance_get_timeline_position:
        unsafe extern "C" fn(EventInstanceHandle, *mut c_int) -> c_int,
    pub event_instance_set_timeline_position:
        unsafe extern "C" fn(EventInstanceHandle, c_int) -> c_int,
    pub event_instance_get_volume:
        unsafe extern "C" fn(EventInstanceHandle, *mut f32, *mut f32) -> c_int,
    pub event_instance_set_volume: unsafe extern "C" fn(EventInstanceHandle, f32) -> c_int,
    pub event_instance_is_virtual:
        unsafe extern "C" fn(EventInstanceHandle, *mut FmodBool) -> c_int,
    pub event_instance_get_parameter_by_name:
        unsafe extern "C" fn(EventInstanceHandle, *const c_char, *mut f32, *mut f32) -> c_int,
    pub event_instance_set_parameter_by_name:
        unsafe extern "C" fn(EventInstanceHandle, *const c_char, f32, FmodBool) -> c_int,
    pub event_instance_get_paused:
        unsafe extern "C" fn(EventInstanceHandle, *mut FmodBool) -> c_int,
    pub event_instance_set_paused: unsafe extern "C" fn(EventInstanceHandle, FmodBool) -> c_int,
    pub event_instance_get_playback_state:
        unsafe extern "C" fn(EventInstanceHandle, *mut c_int) -> c_int,

    // Studio::Bus
    pub bus_get_path: unsafe extern "C" fn(BusHandle, *mut c_char, c_int, *mut c_int) -> c_int,
    pub bus_set_mute: unsafe extern "C" fn(BusHandle, FmodBool) -> c_int,
    pub bus_get_mute: unsafe extern "C" fn(BusHandle, *mut FmodBool) -> c_int,
    pub bus_set_paused: unsafe extern "C" fn(BusHandle, FmodBool) -> c_int,
    pub bus_get_paused: unsafe extern "C" fn(BusHandle, *mut FmodBool) -> c_int,
    pub bus_set_volume: unsafe extern "C" fn(BusHandle, f32) -> c_int,
    pub bus_get_volume: unsafe extern "C" fn(BusHandle, *mut f32, *mut f32) -> c_int,
    pub bus_stop_all_events: unsafe extern "C" fn(BusHandle, c_int) -> c_int,
}
