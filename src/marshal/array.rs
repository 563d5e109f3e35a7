// Array Slice - 고정 용량 버퍼를 미리 잡고 실제 기록 개수만큼 잘라낸다

use libc::c_int;

use super::result::{ListResult, Status};
use super::slot::Slot;

/// 용량 `capacity`의 버퍼로 목록 조회
///
/// `call`은 (array, capacity, count) -> status. 성공 시 앞쪽 `count`개만 노출한다.
/// 음수 용량은 0으로 취급한다.
pub fn collect_list<T, F>(capacity: c_int, call: F) -> ListResult<T>
where
    T: Copy + Default,
    F: FnOnce(*mut T, c_int, *mut c_int) -> c_int,
{
    let capacity = capacity.max(0);
    let mut buffer = vec![T::default(); capacity as usize];
    let mut count = Slot::<c_int>::new();

    let status = Status::from(call(buffer.as_mut_ptr(), capacity, count.as_mut_ptr()));
    if !status.is_ok() {
        return ListResult::failed(status);
    }

    let written = count.read().unwrap_or(0);
    if written > capacity {
        log::warn!(
            "list count {} exceeds capacity {}, clamping",
            written,
            capacity
        );
    }
    let written = written.clamp(0, capacity) as usize;
    log::debug!("list retrieval: {} of {} slots written", written, capacity);

    buffer.truncate(written);
    ListResult::new(status, buffer)
}
