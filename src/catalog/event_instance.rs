// Studio::EventInstance 어댑터
// 전부 직선형이라 스키마로만 정의한다.

use std::ffi::CStr;

use libc::c_int;

use crate::ffi::types::{
    EventDescriptionHandle, EventInstanceHandle, EventProperty, PlaybackState, StopMode,
};
use crate::marshal::Attributes3d;

adapters! {
    fn Studio_EventInstance_GetDescription(instance: EventInstanceHandle) -> Value<EventDescriptionHandle> = event_instance_get_description;
    fn Studio_EventInstance_Start(instance: EventInstanceHandle) -> Status = event_instance_start;
    fn Studio_EventInstance_Stop(instance: EventInstanceHandle, mode: StopMode) -> Status = event_instance_stop;
    fn Studio_EventInstance_Release(instance: EventInstanceHandle) -> Status = event_instance_release;
    /// 평탄화된 12개 필드를 중첩 구조로 재구성
    fn Studio_EventInstance_Get3DAttributes(instance: EventInstanceHandle) -> Value<Attributes3d> = event_instance_get_3d_attributes;
    fn Studio_EventInstance_Set3DAttributes(instance: EventInstanceHandle, attributes: &Attributes3d) -> Status = event_instance_set_3d_attributes;
    /// (pitch, final pitch)
    fn Studio_EventInstance_GetPitch(instance: EventInstanceHandle) -> Pair<f32, f32> = event_instance_get_pitch;
    fn Studio_EventInstance_SetPitch(instance: EventInstanceHandle, pitch: f32) -> Status = event_instance_set_pitch;
    /// 설정되지 않은 속성은 -1
    fn Studio_EventInstance_GetProperty(instance: EventInstanceHandle, index: EventProperty) -> Value<f32> = event_instance_get_property;
    fn Studio_EventInstance_SetProperty(instance: EventInstanceHandle, index: EventProperty, value: f32) -> Status = event_instance_set_property;
    /// 밀리초
    fn Studio_EventInstance_GetTimelinePosition(instance: EventInstanceHandle) -> Value<c_int> = event_instance_get_timeline_position;
    fn Studio_EventInstance_SetTimelinePosition(instance: EventInstanceHandle, position: c_int) -> Status = event_instance_set_timeline_position;
    /// (volume, final volume)
    fn Studio_EventInstance_GetVolume(instance: EventInstanceHandle) -> Pair<f32, f32> = event_instance_get_volume;
    fn Studio_EventInstance_SetVolume(instance: EventInstanceHandle, volume: f32) -> Status = event_instance_set_volume;
    fn Studio_EventInstance_IsVirtual(instance: EventInstanceHandle) -> Value<bool> = event_instance_is_virtual;
    /// (value, final value)
    fn Studio_EventInstance_GetParameterByName(instance: EventInstanceHandle, name: &CStr) -> Pair<f32, f32> = event_instance_get_parameter_by_name;
    fn Studio_EventInstance_SetParameterByName(instance: EventInstanceHandle, name: &CStr, value: f32, ignore_seek_speed: bool) -> Status = event_instance_set_parameter_by_name;
    fn Studio_EventInstance_GetPaused(instance: EventInstanceHandle) -> Value<bool> = event_instance_get_paused;
    fn Studio_EventInstance_SetPaused(instance: EventInstanceHandle, paused: bool) -> Status = event_instance_set_paused;
    fn Studio_EventInstance_GetPlaybackState(instance: EventInstanceHandle) -> Value<PlaybackState> = event_instance_get_playback_state;
}
