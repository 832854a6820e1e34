//! Native long-path resolution fallback.
//!
//! Windows/x86_64 only: `GetLongPathNameW` is bound from kernel32 once per
//! process and the binding is reused thereafter. The binding holds no
//! disposable resource and lives until process exit.

use crate::error::Result;

/// Maximum Windows path length in UTF-16 units, the fixed buffer capacity
/// for the native call.
#[cfg(all(windows, target_arch = "x86_64"))]
const MAX_PATH_UTF16: usize = 32_767;

#[cfg(all(windows, target_arch = "x86_64"))]
mod imp {
    use super::MAX_PATH_UTF16;
    use crate::error::{ExpandError, Result};
    use once_cell::sync::OnceCell;

    type GetLongPathNameW = unsafe extern "system" fn(*const u16, *mut u16, u32) -> u32;

    static LONG_PATH_FN: OnceCell<GetLongPathNameW> = OnceCell::new();

    fn bind() -> Result<GetLongPathNameW> {
        LONG_PATH_FN
            .get_or_try_init(|| unsafe {
                let library = libloading::Library::new("kernel32.dll")
                    .map_err(|err| ExpandError::NativeBind(err.to_string()))?;
                let symbol: libloading::Symbol<GetLongPathNameW> = library
                    .get(b"GetLongPathNameW\0")
                    .map_err(|err| ExpandError::NativeBind(err.to_string()))?;
                let function = *symbol;
                // kernel32 stays mapped until process exit; the handle is
                // never dropped so the pointer stays valid.
                std::mem::forget(library);
                Ok(function)
            })
            .copied()
    }

    pub(super) async fn long_path_name(short_path: &str) -> Result<String> {
        let function = bind()?;
        let path = short_path.to_owned();
        tokio::task::spawn_blocking(move || {
            let wide: Vec<u16> = path.encode_utf16().chain(std::iter::once(0)).collect();
            let mut buffer = vec![0u16; MAX_PATH_UTF16];
            let written =
                unsafe { function(wide.as_ptr(), buffer.as_mut_ptr(), buffer.len() as u32) };
            if written == 0 || written as usize > buffer.len() {
                return Err(ExpandError::NativeCall { path });
            }
            let mut end = written as usize;
            // Some binding conventions count the terminating unit.
            if buffer[end - 1] == 0 {
                end -= 1;
            }
            Ok(String::from_utf16_lossy(&buffer[..end]))
        })
        .await
        .map_err(|_| ExpandError::NativeCall {
            path: short_path.to_owned(),
        })?
    }
}

#[cfg(not(all(windows, target_arch = "x86_64")))]
mod imp {
    use crate::error::{ExpandError, Result};

    pub(super) async fn long_path_name(_short_path: &str) -> Result<String> {
        Err(ExpandError::UnsupportedPlatform)
    }
}

/// Resolves `short_path` through the platform's long-path lookup.
pub(crate) async fn long_path_name(short_path: &str) -> Result<String> {
    imp::long_path_name(short_path).await
}
