// Two-Phase Retrieval - 크기 조회 후 채우기
// 1단계: null 버퍼 + 용량 0으로 필요한 크기를 받는다.
// 2단계: 보고된 크기만큼 버퍼를 잡고 다시 호출한다.

use libc::{c_char, c_int};

use super::result::{Status, ValueResult};
use super::slot::Slot;

/// 2단계 조회 결과 버퍼
///
/// `call`은 (buffer, size, retrieved) -> status.
/// 1단계가 성공하면 2단계 버퍼 길이는 보고된 크기와 정확히 같다.
pub fn retrieve_bytes<F>(mut call: F) -> ValueResult<Vec<u8>>
where
    F: FnMut(*mut c_char, c_int, *mut c_int) -> c_int,
{
    let mut required = Slot::<c_int>::new();
    let status = Status::from(call(std::ptr::null_mut(), 0, required.as_mut_ptr()));
    if !status.is_ok() {
        return ValueResult::failed(status);
    }

    let size = required.read().unwrap_or(0);
    let capacity = if size < 0 {
        log::warn!("negative size {} reported by size query, using 0", size);
        0
    } else {
        size as usize
    };
    log::debug!("two-phase retrieval: phase 1 reported {} bytes", capacity);

    // 크기 0이어도 2단계는 반드시 수행 (빈 Vec의 포인터는 null이 아니다)
    let mut buffer = vec![0u8; capacity];
    let mut retrieved = Slot::<c_int>::new();
    let status = Status::from(call(
        buffer.as_mut_ptr().cast::<c_char>(),
        capacity as c_int,
        retrieved.as_mut_ptr(),
    ));

    ValueResult::new(status, buffer)
}

/// 2단계 조회 후 NUL 종료 문자열로 디코딩
pub fn retrieve_string<F>(call: F) -> ValueResult<String>
where
    F: FnMut(*mut c_char, c_int, *mut c_int) -> c_int,
{
    let bytes = retrieve_bytes(call);
    let status = bytes.status();
    match bytes.into_value() {
        Some(buffer) => ValueResult::new(status, decode_text(buffer)),
        None => ValueResult::failed(status),
    }
}

/// 첫 NUL 이전까지만 사용. 버퍼 밖은 절대 읽지 않는다.
fn decode_text(mut buffer: Vec<u8>) -> String {
    if let Some(end) = buffer.iter().position(|&b| b == 0) {
        buffer.truncate(end);
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("size-queried text is not valid UTF-8: {}", e);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
