// Studio 래퍼 객체
// 핸들 + 공유 브리지. 메서드 하나가 어댑터 하나를 호출하고 Result로 변환한다.
// 복제해도 네이티브 리소스는 복제되지 않으며, 해제는 항상 명시적으로 호출한다.

mod bank;
mod bus;
mod event;
mod system;

pub use bank::Bank;
pub use bus::Bus;
pub use event::{EventDescription, EventInstance};
pub use system::Studio;
