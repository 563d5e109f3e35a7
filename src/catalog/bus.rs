// Studio::Bus 어댑터

use super::Bridge;
use crate::ffi::types::{BusHandle, StopMode};
use crate::marshal::{retrieve_string, StringResult};

adapters! {
    fn Studio_Bus_SetMute(bus: BusHandle, mute: bool) -> Status = bus_set_mute;
    fn Studio_Bus_GetMute(bus: BusHandle) -> Value<bool> = bus_get_mute;
    fn Studio_Bus_SetPaused(bus: BusHandle, paused: bool) -> Status = bus_set_paused;
    fn Studio_Bus_GetPaused(bus: BusHandle) -> Value<bool> = bus_get_paused;
    fn Studio_Bus_SetVolume(bus: BusHandle, volume: f32) -> Status = bus_set_volume;
    /// (volume, final volume)
    fn Studio_Bus_GetVolume(bus: BusHandle) -> Pair<f32, f32> = bus_get_volume;
    fn Studio_Bus_StopAllEvents(bus: BusHandle, mode: StopMode) -> Status = bus_stop_all_events;
}

#[allow(non_snake_case)]
impl Bridge {
    pub fn Studio_Bus_GetPath(&self, bus: BusHandle) -> StringResult {
        let path = retrieve_string(|buffer, size, retrieved| unsafe {
            (self.api.bus_get_path)(bus, buffer, size, retrieved)
        });
        self.observe("Studio_Bus_GetPath", path.status().code());
        path
    }
}
