// 마샬링 프리미티브
// Value Slot, Result Tag, 복합 값 재구성, 2단계 조회, 배열 슬라이스

pub mod array;
pub mod composite;
pub mod result;
pub mod slot;
pub mod two_phase;

pub use array::collect_list;
pub use composite::{Attributes3d, FlatAttributes3d, Vector};
pub use result::{
    BoolResult, F32F32Result, F32Result, I32Result, ListResult, PairResult, Status, StatusResult,
    StringResult, ValueResult,
};
pub use slot::{IntoNative, NativeValue, Slot};
pub use two_phase::{retrieve_bytes, retrieve_string};
