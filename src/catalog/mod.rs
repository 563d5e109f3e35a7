// Call Adapter Catalog
// 네이티브 진입점 하나당 어댑터 하나. 이름은 Studio_<Type>_<Method>.
// 어댑터는 항상 Result Tag를 반환하며 실패도 값으로 돌려준다.

/// 직선형 어댑터 스키마
///
/// `fn 이름(입력...) -> 모양 = NativeApi 필드;`
/// 모양은 `Status`, `Value<T>`, `Pair<A, B>`. out-parameter는 입력 뒤에 붙는다.
macro_rules! adapters {
    (@adapter $(#[$meta:meta])* $name:ident ($($arg:ident: $ty:ty),*) Status $native:ident) => {
        $(#[$meta])*
        pub fn $name(&self, $($arg: $ty),*) -> $crate::marshal::StatusResult {
            let status = unsafe {
                (self.api.$native)($($crate::marshal::IntoNative::into_native($arg)),*)
            };
            $crate::marshal::StatusResult::new(self.observe(stringify!($name), status))
        }
    };
    (@adapter $(#[$meta:meta])* $name:ident ($($arg:ident: $ty:ty),*) Value<$out:ty> $native:ident) => {
        $(#[$meta])*
        pub fn $name(&self, $($arg: $ty),*) -> $crate::marshal::ValueResult<$out> {
            let mut value = $crate::marshal::Slot::<$out>::new();
            let status = unsafe {
                (self.api.$native)(
                    $($crate::marshal::IntoNative::into_native($arg),)*
                    value.as_mut_ptr(),
                )
            };
            $crate::marshal::ValueResult::from_slot(self.observe(stringify!($name), status), value)
        }
    };
    (@adapter $(#[$meta:meta])* $name:ident ($($arg:ident: $ty:ty),*) Pair<$first:ty, $second:ty> $native:ident) => {
        $(#[$meta])*
        pub fn $name(&self, $($arg: $ty),*) -> $crate::marshal::PairResult<$first, $second> {
            let mut first = $crate::marshal::Slot::<$first>::new();
            let mut second = $crate::marshal::Slot::<$second>::new();
            let status = unsafe {
                (self.api.$native)(
                    $($crate::marshal::IntoNative::into_native($arg),)*
                    first.as_mut_ptr(),
                    second.as_mut_ptr(),
                )
            };
            $crate::marshal::PairResult::from_slots(
                self.observe(stringify!($name), status),
                first,
                second,
            )
        }
    };
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $shape:ident $(<$($out:ty),+>)? = $native:ident;
    )*) => {
        #[allow(non_snake_case)]
        impl $crate::catalog::Bridge {
            $(
                adapters!(@adapter $(#[$meta])* $name ($($arg: $ty),*) $shape $(<$($out),+>)? $native);
            )*
        }
    };
}

mod bank;
mod bus;
mod event_description;
mod event_instance;
mod system;

use libc::c_int;

use crate::config::BridgeConfig;
use crate::error::Error;
use crate::ffi::NativeApi;
use crate::marshal::Status;

type Hook = Box<dyn FnOnce(&BridgeConfig) -> Result<(), String>>;

/// 준비 컨텍스트
///
/// 한 번 만들어 `Bridge::setup`에 넘긴다. before-run 훅은 등록 순서대로 한 번씩 실행된다.
pub struct InitContext {
    api: NativeApi,
    config: BridgeConfig,
    hooks: Vec<Hook>,
}

impl InitContext {
    pub fn new(api: NativeApi) -> Self {
        Self {
            api,
            config: BridgeConfig::default(),
            hooks: Vec::new(),
        }
    }

    /// 링크된 libfmodstudio 진입점 사용
    #[cfg(feature = "link-fmod")]
    pub fn linked() -> Self {
        Self::new(NativeApi::linked())
    }

    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// 첫 어댑터 호출 전에 끝나야 하는 작업 등록
    pub fn before_run<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&BridgeConfig) -> Result<(), String> + 'static,
    {
        self.hooks.push(Box::new(hook));
        self
    }
}

/// 준비가 끝난 어댑터 표면
///
/// 값이 존재하면 모든 before-run 훅이 성공한 것이다.
pub struct Bridge {
    api: NativeApi,
    config: BridgeConfig,
}

impl Bridge {
    pub fn setup(context: InitContext) -> Result<Bridge, Error> {
        let InitContext { api, config, hooks } = context;

        let total = hooks.len();
        for (index, hook) in hooks.into_iter().enumerate() {
            log::debug!("running before-run hook {}/{}", index + 1, total);
            hook(&config).map_err(|reason| Error::Setup { hook: index, reason })?;
        }

        log::debug!(
            "bridge ready (header version 0x{:08x})",
            config.header_version
        );
        Ok(Bridge { api, config })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// 호출 결과 기록
    fn observe(&self, function: &'static str, status: c_int) -> Status {
        let status = Status::from(status);
        log::trace!("{} -> {}", function, status);
        if !status.is_ok() && self.config.warn_on_failure {
            log::warn!("{} returned {}", function, status);
        }
        status
    }
}
