// 테스트용 가짜 네이티브 엔진
// NativeApi 전체를 extern "C" 함수로 구현한다. 상태는 스레드 로컬.
//
// 뱅크 바이트 형식: b"RIFF" + 4바이트 + 이벤트 경로들 (각각 '\n' 종료)

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CStr;

use libc::{c_char, c_int, c_uint, c_void};

use super::types::{
    BankHandle, BusHandle, EventDescriptionHandle, EventInstanceHandle, FmodBool, PlaybackState,
    SystemHandle, FMOD_FALSE, FMOD_OK, FMOD_TRUE,
};
use super::NativeApi;
use crate::marshal::{Attributes3d, FlatAttributes3d, Vector};

pub const ERR_FORMAT: c_int = 19;
pub const ERR_INVALID_HANDLE: c_int = 30;
pub const ERR_INVALID_PARAM: c_int = 31;
pub const ERR_TRUNCATED: c_int = 65;
pub const ERR_EVENT_NOT_FOUND: c_int = 74;
pub const ERR_STUDIO_UNINITIALIZED: c_int = 75;

/// 목록 꼬리에 채우는 쓰레기 핸들 값
pub const GARBAGE: usize = 0xDEAD;

const BANK_MAGIC: &[u8; 4] = b"RIFF";

pub struct FakeSystem {
    pub header_version: u32,
    pub initialized: bool,
    pub updates: u32,
    parameters: HashMap<String, f32>,
    listeners: HashMap<c_int, (Attributes3d, Vector)>,
}

pub struct FakeBank {
    system: usize,
    path: String,
    events: Vec<usize>,
}

pub struct FakeEvent {
    path: String,
    instances: Vec<usize>,
}

pub struct FakeInstance {
    event: usize,
    pitch: f32,
    volume: f32,
    /// 페이드 등 엔진 내부 모디파이어. final = requested * modifier
    pub modifier: f32,
    attributes: Attributes3d,
    properties: HashMap<c_int, f32>,
    parameters: HashMap<String, f32>,
    timeline_ms: c_int,
    paused: bool,
    pub is_virtual: bool,
    pub state: c_int,
}

pub struct FakeBus {
    path: String,
    muted: bool,
    paused: bool,
    volume: f32,
    pub stop_requests: Vec<c_int>,
}

#[derive(Default)]
pub struct FakeEngine {
    next_id: usize,
    pub systems: HashMap<usize, FakeSystem>,
    pub banks: HashMap<usize, FakeBank>,
    pub events: HashMap<usize, FakeEvent>,
    pub instances: HashMap<usize, FakeInstance>,
    pub buses: HashMap<usize, FakeBus>,
    /// 경로 조회 호출마다 받은 size 인자
    pub path_sizes: Vec<c_int>,
}

impl FakeEngine {
    fn allocate(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn remove_event(&mut self, event: usize) {
        if let Some(removed) = self.events.remove(&event) {
            for instance in removed.instances {
                self.instances.remove(&instance);
            }
        }
    }

    fn remove_bank(&mut self, bank: usize) {
        if let Some(removed) = self.banks.remove(&bank) {
            for event in removed.events {
                self.remove_event(event);
            }
        }
    }
}

thread_local! {
    static ENGINE: RefCell<FakeEngine> = RefCell::new(FakeEngine::default());
}

/// 스레드 로컬 엔진 상태 초기화
pub fn reset() {
    ENGINE.with(|engine| *engine.borrow_mut() = FakeEngine::default());
}

pub fn with_engine<R>(f: impl FnOnce(&mut FakeEngine) -> R) -> R {
    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

/// 테스트용 뱅크 바이트 생성
pub fn bank_bytes(paths: &[&str]) -> Vec<u8> {
    let mut bytes = BANK_MAGIC.to_vec();
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    for path in paths {
        bytes.extend_from_slice(path.as_bytes());
        bytes.push(b'\n');
    }
    bytes
}

pub fn instance_id(instance: EventInstanceHandle) -> usize {
    instance.as_raw() as usize
}

fn handle_ptr(id: usize) -> *mut c_void {
    id as *mut c_void
}

unsafe fn read_name(name: *const c_char) -> Option<String> {
    if name.is_null() {
        return None;
    }
    CStr::from_ptr(name).to_str().ok().map(str::to_string)
}

/// 크기 조회 규약: 필요 크기는 NUL 포함 (빈 문자열은 0)
unsafe fn write_path(text: &str, path: *mut c_char, size: c_int, retrieved: *mut c_int) -> c_int {
    let required = if text.is_empty() {
        0
    } else {
        text.len() as c_int + 1
    };
    if !retrieved.is_null() {
        *retrieved = required;
    }
    if path.is_null() {
        return FMOD_OK;
    }
    if size < required {
        if size > 0 {
            let fit = (size - 1) as usize;
            std::ptr::copy_nonoverlapping(text.as_ptr(), path.cast::<u8>(), fit);
            *path.add(fit) = 0;
        }
        return ERR_TRUNCATED;
    }
    std::ptr::copy_nonoverlapping(text.as_ptr(), path.cast::<u8>(), text.len());
    if required > 0 {
        *path.add(text.len()) = 0;
    }
    FMOD_OK
}

/// capacity 전체를 쓰고 앞쪽만 유효하다고 보고
unsafe fn write_list<H: Copy>(
    array: *mut H,
    capacity: c_int,
    count: *mut c_int,
    items: &[H],
    garbage: H,
) -> c_int {
    if count.is_null() || capacity < 0 || (capacity > 0 && array.is_null()) {
        return ERR_INVALID_PARAM;
    }
    let capacity = capacity as usize;
    let written = items.len().min(capacity);
    for i in 0..capacity {
        *array.add(i) = if i < written { items[i] } else { garbage };
    }
    *count = written as c_int;
    FMOD_OK
}

fn to_bool(value: bool) -> FmodBool {
    if value {
        FMOD_TRUE
    } else {
        FMOD_FALSE
    }
}

fn with_instance(
    instance: EventInstanceHandle,
    f: impl FnOnce(&mut FakeInstance) -> c_int,
) -> c_int {
    with_engine(|engine| match engine.instances.get_mut(&instance_id(instance)) {
        Some(found) => f(found),
        None => ERR_INVALID_HANDLE,
    })
}

fn with_bus(bus: BusHandle, f: impl FnOnce(&mut FakeBus) -> c_int) -> c_int {
    with_engine(|engine| match engine.buses.get_mut(&(bus.as_raw() as usize)) {
        Some(found) => f(found),
        None => ERR_INVALID_HANDLE,
    })
}

fn with_system(system: SystemHandle, f: impl FnOnce(&mut FakeSystem) -> c_int) -> c_int {
    with_engine(|engine| match engine.systems.get_mut(&(system.as_raw() as usize)) {
        Some(found) => f(found),
        None => ERR_INVALID_HANDLE,
    })
}

// Studio::System

unsafe extern "C" fn system_create(system: *mut SystemHandle, header_version: c_uint) -> c_int {
    if system.is_null() {
        return ERR_INVALID_PARAM;
    }
    let id = with_engine(|engine| {
        let id = engine.allocate();
        engine.systems.insert(
            id,
            FakeSystem {
                header_version,
                initialized: false,
                updates: 0,
                parameters: HashMap::new(),
                listeners: HashMap::new(),
            },
        );
        id
    });
    *system = SystemHandle::from_raw(handle_ptr(id));
    FMOD_OK
}

unsafe extern "C" fn system_initialize(
    system: SystemHandle,
    max_channels: c_int,
    _studio_flags: c_uint,
    _flags: c_uint,
    _extra_driver_data: *mut c_void,
) -> c_int {
    if max_channels <= 0 {
        return ERR_INVALID_PARAM;
    }
    with_system(system, |found| {
        found.initialized = true;
        FMOD_OK
    })
}

unsafe extern "C" fn system_release(system: SystemHandle) -> c_int {
    with_engine(|engine| {
        let id = system.as_raw() as usize;
        if engine.systems.remove(&id).is_none() {
            return ERR_INVALID_HANDLE;
        }
        let banks: Vec<usize> = engine
            .banks
            .iter()
            .filter(|(_, bank)| bank.system == id)
            .map(|(bank_id, _)| *bank_id)
            .collect();
        for bank in banks {
            engine.remove_bank(bank);
        }
        FMOD_OK
    })
}

unsafe extern "C" fn system_update(system: SystemHandle) -> c_int {
    with_engine(|engine| {
        match engine.systems.get_mut(&(system.as_raw() as usize)) {
            Some(found) => found.updates += 1,
            None => return ERR_INVALID_HANDLE,
        }
        // fadeout 진행 중인 인스턴스는 update 한 번에 정지
        for instance in engine.instances.values_mut() {
            if instance.state == PlaybackState::Stopping as c_int {
                instance.state = PlaybackState::Stopped as c_int;
            }
        }
        FMOD_OK
    })
}

unsafe extern "C" fn system_load_bank_memory(
    system: SystemHandle,
    buffer: *const c_char,
    length: c_int,
    _mode: c_int,
    _flags: c_uint,
    bank: *mut BankHandle,
) -> c_int {
    if buffer.is_null() || bank.is_null() || length < 0 {
        return ERR_INVALID_PARAM;
    }
    let bytes = std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize);
    if bytes.len() < 8 || &bytes[..4] != BANK_MAGIC {
        return ERR_FORMAT;
    }
    let body = match std::str::from_utf8(&bytes[8..]) {
        Ok(body) => body,
        Err(_) => return ERR_FORMAT,
    };

    let result = with_engine(|engine| {
        let system_id = system.as_raw() as usize;
        match engine.systems.get(&system_id) {
            Some(found) if found.initialized => {}
            Some(_) => return Err(ERR_STUDIO_UNINITIALIZED),
            None => return Err(ERR_INVALID_HANDLE),
        }
        let bank_id = engine.allocate();
        let mut events = Vec::new();
        for path in body.split_terminator('\n') {
            let event_id = engine.allocate();
            engine.events.insert(
                event_id,
                FakeEvent {
                    path: path.to_string(),
                    instances: Vec::new(),
                },
            );
            events.push(event_id);
        }
        let path = format!("bank:/Bank{}", engine.banks.len() + 1);
        engine.banks.insert(
            bank_id,
            FakeBank {
                system: system_id,
                path,
                events,
            },
        );
        Ok(bank_id)
    });

    match result {
        Ok(bank_id) => {
            *bank = BankHandle::from_raw(handle_ptr(bank_id));
            FMOD_OK
        }
        Err(code) => code,
    }
}

unsafe extern "C" fn system_unload_all(system: SystemHandle) -> c_int {
    with_engine(|engine| {
        let id = system.as_raw() as usize;
        if !engine.systems.contains_key(&id) {
            return ERR_INVALID_HANDLE;
        }
        let banks: Vec<usize> = engine
            .banks
            .iter()
            .filter(|(_, bank)| bank.system == id)
            .map(|(bank_id, _)| *bank_id)
            .collect();
        for bank in banks {
            engine.remove_bank(bank);
        }
        FMOD_OK
    })
}

unsafe extern "C" fn system_get_event(
    system: SystemHandle,
    path_or_id: *const c_char,
    event: *mut EventDescriptionHandle,
) -> c_int {
    let path = match read_name(path_or_id) {
        Some(path) if !event.is_null() => path,
        _ => return ERR_INVALID_PARAM,
    };
    let found = with_engine(|engine| {
        if !engine.systems.contains_key(&(system.as_raw() as usize)) {
            return Err(ERR_INVALID_HANDLE);
        }
        engine
            .events
            .iter()
            .find(|(_, e)| e.path == path)
            .map(|(id, _)| *id)
            .ok_or(ERR_EVENT_NOT_FOUND)
    });
    match found {
        Ok(id) => {
            *event = EventDescriptionHandle::from_raw(handle_ptr(id));
            FMOD_OK
        }
        Err(code) => code,
    }
}

unsafe extern "C" fn system_get_bus(
    system: SystemHandle,
    path_or_id: *const c_char,
    bus: *mut BusHandle,
) -> c_int {
    let path = match read_name(path_or_id) {
        Some(path) if !bus.is_null() => path,
        _ => return ERR_INVALID_PARAM,
    };
    if !path.starts_with("bus:/") {
        return ERR_EVENT_NOT_FOUND;
    }
    let found = with_engine(|engine| {
        if !engine.systems.contains_key(&(system.as_raw() as usize)) {
            return Err(ERR_INVALID_HANDLE);
        }
        if let Some((id, _)) = engine.buses.iter().find(|(_, b)| b.path == path) {
            return Ok(*id);
        }
        let id = engine.allocate();
        engine.buses.insert(
            id,
            FakeBus {
                path,
                muted: false,
                paused: false,
                volume: 1.0,
                stop_requests: Vec::new(),
            },
        );
        Ok(id)
    });
    match found {
        Ok(id) => {
            *bus = BusHandle::from_raw(handle_ptr(id));
            FMOD_OK
        }
        Err(code) => code,
    }
}

unsafe extern "C" fn system_set_parameter_by_name(
    system: SystemHandle,
    name: *const c_char,
    value: f32,
    _ignore_seek_speed: FmodBool,
) -> c_int {
    let name = match read_name(name) {
        Some(name) => name,
        None => return ERR_INVALID_PARAM,
    };
    with_system(system, |found| {
        found.parameters.insert(name, value);
        FMOD_OK
    })
}

unsafe extern "C" fn system_get_parameter_by_name(
    system: SystemHandle,
    name: *const c_char,
    value: *mut f32,
    final_value: *mut f32,
) -> c_int {
    let name = match read_name(name) {
        Some(name) if !value.is_null() && !final_value.is_null() => name,
        _ => return ERR_INVALID_PARAM,
    };
    with_system(system, |found| match found.parameters.get(&name) {
        Some(current) => {
            *value = *current;
            *final_value = *current;
            FMOD_OK
        }
        None => ERR_EVENT_NOT_FOUND,
    })
}

unsafe extern "C" fn system_set_listener_attributes(
    system: SystemHandle,
    listener: c_int,
    attributes: *const Attributes3d,
    attenuation_position: *const Vector,
) -> c_int {
    if attributes.is_null() || listener < 0 {
        return ERR_INVALID_PARAM;
    }
    let attributes = *attributes;
    let attenuation = if attenuation_position.is_null() {
        attributes.position
    } else {
        *attenuation_position
    };
    with_system(system, |found| {
        found.listeners.insert(listener, (attributes, attenuation));
        FMOD_OK
    })
}

unsafe extern "C" fn system_get_listener_attributes(
    system: SystemHandle,
    listener: c_int,
    attributes: *mut FlatAttributes3d,
    attenuation_position: *mut Vector,
) -> c_int {
    if attributes.is_null() || attenuation_position.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_system(system, |found| {
        let (current, attenuation) = found
            .listeners
            .get(&listener)
            .copied()
            .unwrap_or_default();
        *attributes = current.flatten();
        *attenuation_position = attenuation;
        FMOD_OK
    })
}

fn system_banks(engine: &FakeEngine, system: SystemHandle) -> Result<Vec<usize>, c_int> {
    let id = system.as_raw() as usize;
    if !engine.systems.contains_key(&id) {
        return Err(ERR_INVALID_HANDLE);
    }
    let mut banks: Vec<usize> = engine
        .banks
        .iter()
        .filter(|(_, bank)| bank.system == id)
        .map(|(bank_id, _)| *bank_id)
        .collect();
    banks.sort_unstable();
    Ok(banks)
}

unsafe extern "C" fn system_get_bank_count(system: SystemHandle, count: *mut c_int) -> c_int {
    if count.is_null() {
        return ERR_INVALID_PARAM;
    }
    match with_engine(|engine| system_banks(engine, system)) {
        Ok(banks) => {
            *count = banks.len() as c_int;
            FMOD_OK
        }
        Err(code) => code,
    }
}

unsafe extern "C" fn system_get_bank_list(
    system: SystemHandle,
    array: *mut BankHandle,
    capacity: c_int,
    count: *mut c_int,
) -> c_int {
    match with_engine(|engine| system_banks(engine, system)) {
        Ok(banks) => {
            let items: Vec<BankHandle> = banks
                .into_iter()
                .map(|id| BankHandle::from_raw(handle_ptr(id)))
                .collect();
            write_list(
                array,
                capacity,
                count,
                &items,
                BankHandle::from_raw(handle_ptr(GARBAGE)),
            )
        }
        Err(code) => code,
    }
}

// Studio::Bank

unsafe extern "C" fn bank_get_path(
    bank: BankHandle,
    path: *mut c_char,
    size: c_int,
    retrieved: *mut c_int,
) -> c_int {
    let text = with_engine(|engine| {
        engine.path_sizes.push(size);
        engine
            .banks
            .get(&(bank.as_raw() as usize))
            .map(|b| b.path.clone())
    });
    match text {
        Some(text) => write_path(&text, path, size, retrieved),
        None => ERR_INVALID_HANDLE,
    }
}

unsafe extern "C" fn bank_get_event_count(bank: BankHandle, count: *mut c_int) -> c_int {
    if count.is_null() {
        return ERR_INVALID_PARAM;
    }
    let found = with_engine(|engine| {
        engine
            .banks
            .get(&(bank.as_raw() as usize))
            .map(|b| b.events.len())
    });
    match found {
        Some(n) => {
            *count = n as c_int;
            FMOD_OK
        }
        None => ERR_INVALID_HANDLE,
    }
}

unsafe extern "C" fn bank_get_event_list(
    bank: BankHandle,
    array: *mut EventDescriptionHandle,
    capacity: c_int,
    count: *mut c_int,
) -> c_int {
    let events = with_engine(|engine| {
        engine
            .banks
            .get(&(bank.as_raw() as usize))
            .map(|b| b.events.clone())
    });
    match events {
        Some(events) => {
            let items: Vec<EventDescriptionHandle> = events
                .into_iter()
                .map(|id| EventDescriptionHandle::from_raw(handle_ptr(id)))
                .collect();
            write_list(
                array,
                capacity,
                count,
                &items,
                EventDescriptionHandle::from_raw(handle_ptr(GARBAGE)),
            )
        }
        None => ERR_INVALID_HANDLE,
    }
}

unsafe extern "C" fn bank_unload(bank: BankHandle) -> c_int {
    with_engine(|engine| {
        let id = bank.as_raw() as usize;
        if !engine.banks.contains_key(&id) {
            return ERR_INVALID_HANDLE;
        }
        engine.remove_bank(id);
        FMOD_OK
    })
}

// Studio::EventDescription

unsafe extern "C" fn event_description_get_path(
    description: EventDescriptionHandle,
    path: *mut c_char,
    size: c_int,
    retrieved: *mut c_int,
) -> c_int {
    let text = with_engine(|engine| {
        engine.path_sizes.push(size);
        engine
            .events
            .get(&(description.as_raw() as usize))
            .map(|e| e.path.clone())
    });
    match text {
        Some(text) => write_path(&text, path, size, retrieved),
        None => ERR_INVALID_HANDLE,
    }
}

unsafe extern "C" fn event_description_create_instance(
    description: EventDescriptionHandle,
    instance: *mut EventInstanceHandle,
) -> c_int {
    if instance.is_null() {
        return ERR_INVALID_PARAM;
    }
    let created = with_engine(|engine| {
        let event_id = description.as_raw() as usize;
        if !engine.events.contains_key(&event_id) {
            return None;
        }
        let id = engine.allocate();
        engine.instances.insert(
            id,
            FakeInstance {
                event: event_id,
                pitch: 1.0,
                volume: 1.0,
                modifier: 1.0,
                attributes: Attributes3d::default(),
                properties: HashMap::new(),
                parameters: HashMap::new(),
                timeline_ms: 0,
                paused: false,
                is_virtual: false,
                state: PlaybackState::Stopped as c_int,
            },
        );
        if let Some(event) = engine.events.get_mut(&event_id) {
            event.instances.push(id);
        }
        Some(id)
    });
    match created {
        Some(id) => {
            *instance = EventInstanceHandle::from_raw(handle_ptr(id));
            FMOD_OK
        }
        None => ERR_INVALID_HANDLE,
    }
}

fn event_instances(engine: &FakeEngine, description: EventDescriptionHandle) -> Option<Vec<usize>> {
    engine
        .events
        .get(&(description.as_raw() as usize))
        .map(|e| e.instances.clone())
}

unsafe extern "C" fn event_description_get_instance_count(
    description: EventDescriptionHandle,
    count: *mut c_int,
) -> c_int {
    if count.is_null() {
        return ERR_INVALID_PARAM;
    }
    match with_engine(|engine| event_instances(engine, description)) {
        Some(instances) => {
            *count = instances.len() as c_int;
            FMOD_OK
        }
        None => ERR_INVALID_HANDLE,
    }
}

unsafe extern "C" fn event_description_get_instance_list(
    description: EventDescriptionHandle,
    array: *mut EventInstanceHandle,
    capacity: c_int,
    count: *mut c_int,
) -> c_int {
    match with_engine(|engine| event_instances(engine, description)) {
        Some(instances) => {
            let items: Vec<EventInstanceHandle> = instances
                .into_iter()
                .map(|id| EventInstanceHandle::from_raw(handle_ptr(id)))
                .collect();
            write_list(
                array,
                capacity,
                count,
                &items,
                EventInstanceHandle::from_raw(handle_ptr(GARBAGE)),
            )
        }
        None => ERR_INVALID_HANDLE,
    }
}

unsafe extern "C" fn event_description_release_all_instances(
    description: EventDescriptionHandle,
) -> c_int {
    with_engine(|engine| {
        let instances = match engine.events.get_mut(&(description.as_raw() as usize)) {
            Some(event) => std::mem::take(&mut event.instances),
            None => return ERR_INVALID_HANDLE,
        };
        for id in instances {
            engine.instances.remove(&id);
        }
        FMOD_OK
    })
}

unsafe extern "C" fn event_description_is_3d(
    description: EventDescriptionHandle,
    is_3d: *mut FmodBool,
) -> c_int {
    if is_3d.is_null() {
        return ERR_INVALID_PARAM;
    }
    let found = with_engine(|engine| {
        engine
            .events
            .get(&(description.as_raw() as usize))
            .map(|e| e.path.contains("/3D/"))
    });
    match found {
        Some(value) => {
            *is_3d = to_bool(value);
            FMOD_OK
        }
        None => ERR_INVALID_HANDLE,
    }
}

// Studio::EventInstance

unsafe extern "C" fn event_instance_get_description(
    instance: EventInstanceHandle,
    description: *mut EventDescriptionHandle,
) -> c_int {
    if description.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *description = EventDescriptionHandle::from_raw(handle_ptr(found.event));
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_start(instance: EventInstanceHandle) -> c_int {
    with_instance(instance, |found| {
        found.state = PlaybackState::Playing as c_int;
        found.timeline_ms = 0;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_stop(instance: EventInstanceHandle, mode: c_int) -> c_int {
    with_instance(instance, |found| match mode {
        0 => {
            found.state = PlaybackState::Stopping as c_int;
            FMOD_OK
        }
        1 => {
            found.state = PlaybackState::Stopped as c_int;
            FMOD_OK
        }
        _ => ERR_INVALID_PARAM,
    })
}

unsafe extern "C" fn event_instance_release(instance: EventInstanceHandle) -> c_int {
    with_engine(|engine| {
        let id = instance_id(instance);
        let removed = match engine.instances.remove(&id) {
            Some(removed) => removed,
            None => return ERR_INVALID_HANDLE,
        };
        if let Some(event) = engine.events.get_mut(&removed.event) {
            event.instances.retain(|other| *other != id);
        }
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_3d_attributes(
    instance: EventInstanceHandle,
    attributes: *mut FlatAttributes3d,
) -> c_int {
    if attributes.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *attributes = found.attributes.flatten();
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_set_3d_attributes(
    instance: EventInstanceHandle,
    attributes: *const Attributes3d,
) -> c_int {
    if attributes.is_null() {
        return ERR_INVALID_PARAM;
    }
    let attributes = *attributes;
    with_instance(instance, |found| {
        found.attributes = attributes;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_pitch(
    instance: EventInstanceHandle,
    pitch: *mut f32,
    final_pitch: *mut f32,
) -> c_int {
    if pitch.is_null() || final_pitch.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *pitch = found.pitch;
        *final_pitch = found.pitch * found.modifier;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_set_pitch(instance: EventInstanceHandle, pitch: f32) -> c_int {
    if !pitch.is_finite() || pitch < 0.0 {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        found.pitch = pitch;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_property(
    instance: EventInstanceHandle,
    index: c_int,
    value: *mut f32,
) -> c_int {
    if value.is_null() || !(0..=5).contains(&index) {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        // 설정되지 않은 속성은 -1 (이벤트 기본값 사용)
        *value = found.properties.get(&index).copied().unwrap_or(-1.0);
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_set_property(
    instance: EventInstanceHandle,
    index: c_int,
    value: f32,
) -> c_int {
    if !(0..=5).contains(&index) {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        found.properties.insert(index, value);
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_timeline_position(
    instance: EventInstanceHandle,
    position: *mut c_int,
) -> c_int {
    if position.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *position = found.timeline_ms;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_set_timeline_position(
    instance: EventInstanceHandle,
    position: c_int,
) -> c_int {
    if position < 0 {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        found.timeline_ms = position;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_volume(
    instance: EventInstanceHandle,
    volume: *mut f32,
    final_volume: *mut f32,
) -> c_int {
    if volume.is_null() || final_volume.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *volume = found.volume;
        *final_volume = found.volume * found.modifier;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_set_volume(
    instance: EventInstanceHandle,
    volume: f32,
) -> c_int {
    if !volume.is_finite() || volume < 0.0 {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        found.volume = volume;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_is_virtual(
    instance: EventInstanceHandle,
    is_virtual: *mut FmodBool,
) -> c_int {
    if is_virtual.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *is_virtual = to_bool(found.is_virtual);
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_parameter_by_name(
    instance: EventInstanceHandle,
    name: *const c_char,
    value: *mut f32,
    final_value: *mut f32,
) -> c_int {
    let name = match read_name(name) {
        Some(name) if !value.is_null() && !final_value.is_null() => name,
        _ => return ERR_INVALID_PARAM,
    };
    with_instance(instance, |found| match found.parameters.get(&name) {
        Some(current) => {
            *value = *current;
            *final_value = *current * found.modifier;
            FMOD_OK
        }
        None => ERR_EVENT_NOT_FOUND,
    })
}

unsafe extern "C" fn event_instance_set_parameter_by_name(
    instance: EventInstanceHandle,
    name: *const c_char,
    value: f32,
    _ignore_seek_speed: FmodBool,
) -> c_int {
    let name = match read_name(name) {
        Some(name) => name,
        None => return ERR_INVALID_PARAM,
    };
    with_instance(instance, |found| {
        found.parameters.insert(name, value);
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_paused(
    instance: EventInstanceHandle,
    paused: *mut FmodBool,
) -> c_int {
    if paused.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *paused = to_bool(found.paused);
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_set_paused(
    instance: EventInstanceHandle,
    paused: FmodBool,
) -> c_int {
    with_instance(instance, |found| {
        found.paused = paused != FMOD_FALSE;
        FMOD_OK
    })
}

unsafe extern "C" fn event_instance_get_playback_state(
    instance: EventInstanceHandle,
    state: *mut c_int,
) -> c_int {
    if state.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_instance(instance, |found| {
        *state = found.state;
        FMOD_OK
    })
}

// Studio::Bus

unsafe extern "C" fn bus_get_path(
    bus: BusHandle,
    path: *mut c_char,
    size: c_int,
    retrieved: *mut c_int,
) -> c_int {
    let text = with_engine(|engine| {
        engine.path_sizes.push(size);
        engine
            .buses
            .get(&(bus.as_raw() as usize))
            .map(|b| b.path.clone())
    });
    match text {
        Some(text) => write_path(&text, path, size, retrieved),
        None => ERR_INVALID_HANDLE,
    }
}

unsafe extern "C" fn bus_set_mute(bus: BusHandle, mute: FmodBool) -> c_int {
    with_bus(bus, |found| {
        found.muted = mute != FMOD_FALSE;
        FMOD_OK
    })
}

unsafe extern "C" fn bus_get_mute(bus: BusHandle, mute: *mut FmodBool) -> c_int {
    if mute.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_bus(bus, |found| {
        *mute = to_bool(found.muted);
        FMOD_OK
    })
}

unsafe extern "C" fn bus_set_paused(bus: BusHandle, paused: FmodBool) -> c_int {
    with_bus(bus, |found| {
        found.paused = paused != FMOD_FALSE;
        FMOD_OK
    })
}

unsafe extern "C" fn bus_get_paused(bus: BusHandle, paused: *mut FmodBool) -> c_int {
    if paused.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_bus(bus, |found| {
        *paused = to_bool(found.paused);
        FMOD_OK
    })
}

unsafe extern "C" fn bus_set_volume(bus: BusHandle, volume: f32) -> c_int {
    if !volume.is_finite() || volume < 0.0 {
        return ERR_INVALID_PARAM;
    }
    with_bus(bus, |found| {
        found.volume = volume;
        FMOD_OK
    })
}

unsafe extern "C" fn bus_get_volume(
    bus: BusHandle,
    volume: *mut f32,
    final_volume: *mut f32,
) -> c_int {
    if volume.is_null() || final_volume.is_null() {
        return ERR_INVALID_PARAM;
    }
    with_bus(bus, |found| {
        *volume = found.volume;
        *final_volume = if found.muted { 0.0 } else { found.volume };
        FMOD_OK
    })
}

unsafe extern "C" fn bus_stop_all_events(bus: BusHandle, mode: c_int) -> c_int {
    with_bus(bus, |found| {
        found.stop_requests.push(mode);
        FMOD_OK
    })
}

/// 가짜 엔진 진입점 테이블
pub fn api() -> NativeApi {
    NativeApi {
        system_create,
        system_initialize,
        system_release,
        system_update,
        system_load_bank_memory,
        system_unload_all,
        system_get_event,
        system_get_bus,
        system_set_parameter_by_name,
        system_get_parameter_by_name,
        system_set_listener_attributes,
        system_get_listener_attributes,
        system_get_bank_count,
        system_get_bank_list,
        bank_get_path,
        bank_get_event_count,
        bank_get_event_list,
        bank_unload,
        event_description_get_path,
        event_description_create_instance,
        event_description_get_instance_count,
        event_description_get_instance_list,
        event_description_release_all_instances,
        event_description_is_3d,
        event_instance_get_description,
        event_instance_start,
        event_instance_stop,
        event_instance_release,
        event_instance_get_3d_attributes,
        event_instance_set_3d_attributes,
        event_instance_get_pitch,
        event_instance_set_pitch,
        event_instance_get_property,
        event_instance_set_property,
        event_instance_get_timeline_position,
        event_instance_set_timeline_position,
        event_instance_get_volume,
        event_instance_set_volume,
        event_instance_is_virtual,
        event_instance_get_parameter_by_name,
        event_instance_set_parameter_by_name,
        event_instance_get_paused,
        event_instance_set_paused,
        event_instance_get_playback_state,
        bus_get_path,
        bus_set_mute,
        bus_get_mute,
        bus_set_paused,
        bus_get_paused,
        bus_set_volume,
        bus_get_volume,
        bus_stop_all_events,
    }
}
