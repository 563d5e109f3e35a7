// libfmodstudio 링크 바인딩 (link-fmod 피처)
// FMOD_Studio_* 심볼을 NativeApi 테이블에 연결한다.

use libc::{c_char, c_int, c_uint, c_void};

use super::types::{
    BankHandle, BusHandle, EventDescriptionHandle, EventInstanceHandle, FmodBool, SystemHandle,
};
use super::NativeApi;
use crate::marshal::{Attributes3d, FlatAttributes3d, Vector};

#[link(name = "fmodstudio")]
extern "C" {
    fn FMOD_Studio_System_Create(system: *mut SystemHandle, header_version: c_uint) -> c_int;
    fn FMOD_Studio_System_Initialize(
        system: SystemHandle,
        max_channels: c_int,
        studio_flags: c_uint,
        flags: c_uint,
        extra_driver_data: *mut c_void,
    ) -> c_int;
    fn FMOD_Studio_System_Release(system: SystemHandle) -> c_int;
    fn FMOD_Studio_System_Update(system: SystemHandle) -> c_int;
    fn FMOD_Studio_System_LoadBankMemory(
        system: SystemHandle,
        buffer: *const c_char,
        length: c_int,
        mode: c_int,
        flags: c_uint,
        bank: *mut BankHandle,
    ) -> c_int;
    fn FMOD_Studio_System_UnloadAll(system: SystemHandle) -> c_int;
    fn FMOD_Studio_System_GetEvent(
        system: SystemHandle,
        path_or_id: *const c_char,
        event: *mut EventDescriptionHandle,
    ) -> c_int;
    fn FMOD_Studio_System_GetBus(
        system: SystemHandle,
        path_or_id: *const c_char,
        bus: *mut BusHandle,
    ) -> c_int;
    fn FMOD_Studio_System_SetParameterByName(
        system: SystemHandle,
        name: *const c_char,
        value: f32,
        ignore_seek_speed: FmodBool,
    ) -> c_int;
    fn FMOD_Studio_System_GetParameterByName(
        system: SystemHandle,
        name: *const c_char,
        value: *mut f32,
        final_value: *mut f32,
    ) -> c_int;
    fn FMOD_Studio_System_SetListenerAttributes(
        system: SystemHandle,
        listener: c_int,
        attributes: *const Attributes3d,
        attenuation_position: *const Vector,
    ) -> c_int;
    fn FMOD_Studio_System_GetListenerAttributes(
        system: SystemHandle,
        listener: c_int,
        attributes: *mut FlatAttributes3d,
        attenuation_position: *mut Vector,
    ) -> c_int;
    fn FMOD_Studio_System_GetBankCount(system: SystemHandle, count: *mut c_int) -> c_int;
    fn FMOD_Studio_System_GetBankList(
        system: SystemHandle,
        array: *mut BankHandle,
        capacity: c_int,
        count: *mut c_int,
    ) -> c_int;

    fn FMOD_Studio_Bank_GetPath(
        bank: BankHandle,
        path: *mut c_char,
        size: c_int,
        retrieved: *mut c_int,
    ) -> c_int;
    fn FMOD_Studio_Bank_GetEventCount(bank: BankHandle, count: *mut c_int) -> c_int;
    fn FMOD_Studio_Bank_GetEventList(
        bank: BankHandle,
        array: *mut EventDescriptionHandle,
        capacity: c_int,
        count: *mut c_int,
    ) -> c_int;
    fn FMOD_Studio_Bank_Unload(bank: BankHandle) -> c_int;

    fn FMOD_Studio_EventDescription_GetPath(
        description: EventDescriptionHandle,
        path: *mut c_char,
        size: c_int,
        retrieved: *mut c_int,
    ) -> c_int;
    fn FMOD_Studio_EventDescription_CreateInstance(
        description: EventDescriptionHandle,
        instance: *mut EventInstanceHandle,
    ) -> c_int;
    fn FMOD_Studio_EventDescription_GetInstanceCount(
        description: EventDescriptionHandle,
        count: *mut c_int,
    ) -> c_int;
    fn FMOD_Studio_EventDescription_GetInstanceList(
        description: EventDescriptionHandle,
        array: *mut EventInstanceHandle,
        capacity: c_int,
        count: *mut c_int,
    ) -> c_int;
    fn FMOD_Studio_EventDescription_ReleaseAllInstances(description: EventDescriptionHandle)
        -> c_int;
    fn FMOD_Studio_EventDescription_Is3D(
        description: EventDescriptionHandle,
        is_3d: *mut FmodBool,
    ) -> c_int;

    fn FMOD_Studio_EventInstance_GetDescription(
        instance: EventInstanceHandle,
        description: *mut EventDescriptionHandle,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_Start(instance: EventInstanceHandle) -> c_int;
    fn FMOD_Studio_EventInstance_Stop(instance: EventInstanceHandle, mode: c_int) -> c_int;
    fn FMOD_Studio_EventInstance_Release(instance: EventInstanceHandle) -> c_int;
    fn FMOD_Studio_EventInstance_Get3DAttributes(
        instance: EventInstanceHandle,
        attributes: *mut FlatAttributes3d,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_Set3DAttributes(
        instance: EventInstanceHandle,
        attributes: *const Attributes3d,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_GetPitch(
        instance: EventInstanceHandle,
        pitch: *mut f32,
        final_pitch: *mut f32,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_SetPitch(instance: EventInstanceHandle, pitch: f32) -> c_int;
    fn FMOD_Studio_EventInstance_GetProperty(
        instance: EventInstanceHandle,
        index: c_int,
        value: *mut f32,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_SetProperty(
        instance: EventInstanceHandle,
        index: c_int,
        value: f32,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_GetTimelinePosition(
        instance: EventInstanceHandle,
        position: *mut c_int,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_SetTimelinePosition(
        instance: EventInstanceHandle,
        position: c_int,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_GetVolume(
        instance: EventInstanceHandle,
        volume: *mut f32,
        final_volume: *mut f32,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_SetVolume(instance: EventInstanceHandle, volume: f32) -> c_int;
    fn FMOD_Studio_EventInstance_IsVirtual(
        instance: EventInstanceHandle,
        is_virtual: *mut FmodBool,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_GetParameterByName(
        instance: EventInstanceHandle,
        name: *const c_char,
        value: *mut f32,
        final_value: *mut f32,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_SetParameterByName(
        instance: EventInstanceHandle,
        name: *const c_char,
        value: f32,
        ignore_seek_speed: FmodBool,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_GetPaused(
        instance: EventInstanceHandle,
        paused: *mut FmodBool,
    ) -> c_int;
    fn FMOD_Studio_EventInstance_SetPaused(instance: EventInstanceHandle, paused: FmodBool)
        -> c_int;
    fn FMOD_Studio_EventInstance_GetPlaybackState(
        instance: EventInstanceHandle,
        state: *mut c_int,
    ) -> c_int;

    fn FMOD_Studio_Bus_GetPath(
        bus: BusHandle,
        path: *mut c_char,
        size: c_int,
        retrieved: *mut c_int,
    ) -> c_int;
    fn FMOD_Studio_Bus_SetMute(bus: BusHandle, mute: FmodBool) -> c_int;
    fn FMOD_Studio_Bus_GetMute(bus: BusHandle, mute: *mut FmodBool) -> c_int;
    fn FMOD_Studio_Bus_SetPaused(bus: BusHandle, paused: FmodBool) -> c_int;
    fn FMOD_Studio_Bus_GetPaused(bus: BusHandle, paused: *mut FmodBool) -> c_int;
    fn FMOD_Studio_Bus_SetVolume(bus: BusHandle, volume: f32) -> c_int;
    fn FMOD_Studio_Bus_GetVolume(bus: BusHandle, volume: *mut f32, final_volume: *mut f32)
        -> c_int;
    fn FMOD_Studio_Bus_StopAllEvents(bus: BusHandle, mode: c_int) -> c_int;
}

impl NativeApi {
    /// 링크된 libfmodstudio 심볼로 테이블 구성
    pub fn linked() -> Self {
        Self {
            system_create: FMOD_Studio_System_Create,
            system_initialize: FMOD_Studio_System_Initialize,
            system_release: FMOD_Studio_System_Release,
            system_update: FMOD_Studio_System_Update,
            system_load_bank_memory: FMOD_Studio_System_LoadBankMemory,
            system_unload_all: FMOD_Studio_System_UnloadAll,
            system_get_event: FMOD_Studio_System_GetEvent,
            system_get_bus: FMOD_Studio_System_GetBus,
            system_set_parameter_by_name: FMOD_Studio_System_SetParameterByName,
            system_get_parameter_by_name: FMOD_Studio_System_GetParameterByName,
            system_set_listener_attributes: FMOD_Studio_System_SetListenerAttributes,
            system_get_listener_attributes: FMOD_Studio_System_GetListenerAttributes,
            system_get_bank_count: FMOD_Studio_System_GetBankCount,
            system_get_bank_list: FMOD_Studio_System_GetBankList,
            bank_get_path: FMOD_Studio_Bank_GetPath,
            bank_get_event_count: FMOD_Studio_Bank_GetEventCount,
            bank_get_event_list: FMOD_Studio_Bank_GetEventList,
            bank_unload: FMOD_Studio_Bank_Unload,
            event_description_get_path: FMOD_Studio_EventDescription_GetPath,
            event_description_create_instance: FMOD_Studio_EventDescription_CreateInstance,
            event_description_get_instance_count: FMOD_Studio_EventDescription_GetInstanceCount,
            event_description_get_instance_list: FMOD_Studio_EventDescription_GetInstanceList,
            event_description_release_all_instances:
                FMOD_Studio_EventDescription_ReleaseAllInstances,
            event_description_is_3d: FMOD_Studio_EventDescription_Is3D,
            event_instance_get_description: FMOD_Studio_EventInstance_GetDescription,
            event_instance_start: FMOD_Studio_EventInstance_Start,
            event_instance_stop: FMOD_Studio_EventInstance_Stop,
            event_instance_release: FMOD_Studio_EventInstance_Release,
            event_instance_get_3d_attributes: FMOD_Studio_EventInstance_Get3DAttributes,
            event_instance_set_3d_attributes: FMOD_Studio_EventInstance_Set3DAttributes,
            event_instance_get_pitch: FMOD_Studio_EventInstance_GetPitch,
            event_instance_set_pitch: FMOD_Studio_EventInstance_SetPitch,
            event_instance_get_property: FMOD_Studio_EventInstance_GetProperty,
            event_instance_set_property: FMOD_Studio_EventInstance_SetProperty,
            event_instance_get_timeline_position: FMOD_Studio_EventInstance_GetTimelinePosition,
            event_instance_set_timeline_position: FMOD_Studio_EventInstance_SetTimelinePosition,
            event_instance_get_volume: FMOD_Studio_EventInstance_GetVolume,
            event_instance_set_volume: FMOD_Studio_EventInstance_SetVolume,
            event_instance_is_virtual: FMOD_Studio_EventInstance_IsVirtual,
            event_instance_get_parameter_by_name: FMOD_Studio_EventInstance_GetParameterByName,
            event_instance_set_parameter_by_name: FMOD_Studio_EventInstance_SetParameterByName,
            event_instance_get_paused: FMOD_Studio_EventInstance_GetPaused,
            event_instance_set_paused: FMOD_Studio_EventInstance_SetPaused,
            event_instance_get_playback_state: FMOD_Studio_EventInstance_GetPlaybackState,
            bus_get_path: FMOD_Studio_Bus_GetPath,
            bus_set_mute: FMOD_Studio_Bus_SetMute,
            bus_get_mute: FMOD_Studio_Bus_GetMute,
            bus_set_paused: FMOD_Studio_Bus_SetPaused,
            bus_get_paused: FMOD_Studio_Bus_GetPaused,
            bus_set_volume: FMOD_Studio_Bus_SetVolume,
            bus_get_volume: FMOD_Studio_Bus_GetVolume,
            bus_stop_all_events: FMOD_Studio_Bus_StopAllEvents,
        }
    }
}
