//! Safe client over a controller library (Windows only).
//!
//! Applications talk to a running screen reader through the controller
//! client DLL, which exports the same five entry points as the in-process
//! shim. `Controller` loads that library at runtime, resolves the symbols
//! once, and wraps each call in marshaling plus status translation.

#![cfg(windows)]

use std::ffi::CString;
use std::mem;
use std::path::Path;

use windows::core::{PCSTR, PCWSTR};
use windows::Win32::Foundation::{FreeLibrary, HMODULE};
use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};

use crate::error::{ControllerError, Result};
use crate::hooks::{BrailleMessageFn, CancelSpeechFn, InputLangChangeFn, SpeakTextFn};
use crate::status::{check, ErrorStatus};
use crate::wide::to_wide;

/// `nvdaController_testIfRunning` has no hook slot, but the client still
/// resolves it like the others.
type TestIfRunningFn = unsafe extern "system" fn() -> ErrorStatus;

const DEFAULT_LIBRARY: &str = "nvdaControllerClient.dll";

/// A resolved controller client library.
pub struct Controller {
    module: HMODULE,
    speak: SpeakTextFn,
    cancel: CancelSpeechFn,
    braille: BrailleMessageFn,
    test: TestIfRunningFn,
    lang_change: InputLangChangeFn,
}

impl Controller {
    /// Load `nvdaControllerClient.dll` from the normal search path.
    pub fn new() -> Result<Self> {
        Self::with_library(Path::new(DEFAULT_LIBRARY))
    }

    /// Load a controller client library from an explicit path.
    pub fn with_library(path: &Path) -> Result<Self> {
        let wide_path = to_wide(&path.to_string_lossy())?;
        let module = unsafe { LoadLibraryW(PCWSTR(wide_path.as_ptr())) }
            .map_err(|e| ControllerError::LibraryLoad(format!("{:?}", e)))?;

        // Resolve everything up front so a truncated library fails at
        // load time, not mid-call.
        let controller = unsafe {
            Self {
                module,
                speak: resolve(module, "nvdaController_speakText")?,
                cancel: resolve(module, "nvdaController_cancelSpeech")?,
                braille: resolve(module, "nvdaController_brailleMessage")?,
                test: resolve(module, "nvdaController_testIfRunning")?,
                lang_change: resolve(module, "nvdaController_inputLangChangeNotify")?,
            }
        };
        Ok(controller)
    }

    /// Speak text through the screen reader's current synthesizer.
    pub fn speak_text(&self, text: &str) -> Result<()> {
        let wide = to_wide(text)?;
        check(unsafe { (self.speak)(wide.as_ptr()) })
    }

    /// Cancel any in-progress speech.
    pub fn cancel_speech(&self) -> Result<()> {
        check(unsafe { (self.cancel)() })
    }

    /// Flash a message on the braille display.
    pub fn braille_message(&self, text: &str) -> Result<()> {
        let wide = to_wide(text)?;
        check(unsafe { (self.braille)(wide.as_ptr()) })
    }

    /// Probe whether the screen reader is reachable.
    pub fn test_if_running(&self) -> Result<()> {
        check(unsafe { (self.test)() })
    }

    /// Report a keyboard-layout change in the given thread.
    pub fn input_lang_change_notify(
        &self,
        thread_id: i32,
        hkl: u32,
        layout: &str,
    ) -> Result<()> {
        let wide = to_wide(layout)?;
        check(unsafe { (self.lang_change)(thread_id, hkl, wide.as_ptr()) })
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        unsafe {
            let _ = FreeLibrary(self.module);
        }
    }
}

unsafe fn resolve<F: Copy>(module: HMODULE, name: &str) -> Result<F> {
    debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<*const ()>());
    let c_name =
        CString::new(name).map_err(|_| ControllerError::MissingSymbol(name.to_string()))?;
    let proc = GetProcAddress(module, PCSTR(c_name.as_ptr() as *const u8))
        .ok_or_else(|| ControllerError::MissingSymbol(name.to_string()))?;
    Ok(mem::transmute_copy(&proc))
}
