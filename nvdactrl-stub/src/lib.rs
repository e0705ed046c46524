//! In-process export shim for the NVDA controller entry points.
//!
//! This library exports the five `nvdaController_*` functions plus the
//! underscore-prefixed data symbols backing them. The real
//! implementations live elsewhere in the host; a loader writes their
//! addresses into the exported slots after the library is mapped, and
//! each stub simply forwards through its slot, returning whatever status
//! the backing function returns.
//!
//! The slot names and calling convention match the original controller
//! DLL exactly, so the existing loader needs no changes. The one
//! behavioral addition: a call that arrives before its slot is populated
//! returns `RPC_S_SERVER_UNAVAILABLE` rather than jumping through null.

#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use nvdactrl::hooks::{
    BrailleMessageFn, CancelSpeechFn, HookSlot, InputLangChangeFn, SpeakTextFn,
};
use nvdactrl::status::{ErrorStatus, RPC_S_SERVER_UNAVAILABLE, STATUS_OK};

#[no_mangle]
pub static _nvdaController_speakText: HookSlot<SpeakTextFn> = HookSlot::empty();

#[no_mangle]
pub static _nvdaController_cancelSpeech: HookSlot<CancelSpeechFn> = HookSlot::empty();

#[no_mangle]
pub static _nvdaController_brailleMessage: HookSlot<BrailleMessageFn> = HookSlot::empty();

#[no_mangle]
pub static _nvdaController_inputLangChangeNotify: HookSlot<InputLangChangeFn> =
    HookSlot::empty();

/// Speak `text` through the screen reader.
///
/// # Safety
/// `text` must be null or a NUL-terminated UTF-16 buffer valid for the
/// duration of the call; the populated hook has the same requirement.
#[no_mangle]
pub unsafe extern "system" fn nvdaController_speakText(text: *const u16) -> ErrorStatus {
    match _nvdaController_speakText.get() {
        Some(hook) => hook(text),
        None => RPC_S_SERVER_UNAVAILABLE,
    }
}

/// Cancel any in-progress speech.
#[no_mangle]
pub unsafe extern "system" fn nvdaController_cancelSpeech() -> ErrorStatus {
    match _nvdaController_cancelSpeech.get() {
        Some(hook) => hook(),
        None => RPC_S_SERVER_UNAVAILABLE,
    }
}

/// Flash `text` on the braille display.
///
/// # Safety
/// Same contract as [`nvdaController_speakText`].
#[no_mangle]
pub unsafe extern "system" fn nvdaController_brailleMessage(text: *const u16) -> ErrorStatus {
    match _nvdaController_brailleMessage.get() {
        Some(hook) => hook(text),
        None => RPC_S_SERVER_UNAVAILABLE,
    }
}

/// Report that the controller surface is reachable.
///
/// Succeeds unconditionally: reaching this export at all means the
/// library is loaded in the host process.
#[no_mangle]
pub extern "system" fn nvdaController_testIfRunning() -> ErrorStatus {
    STATUS_OK
}

/// Notify the screen reader that `thread_id` switched to the keyboard
/// layout `hkl`, described by `layout`.
///
/// # Safety
/// `layout` has the same contract as the text pointer in
/// [`nvdaController_speakText`].
#[no_mangle]
pub unsafe extern "system" fn nvdaController_inputLangChangeNotify(
    thread_id: i32,
    hkl: u32,
    layout: *const u16,
) -> ErrorStatus {
    match _nvdaController_inputLangChangeNotify.get() {
        Some(hook) => hook(thread_id, hkl, layout),
        None => RPC_S_SERVER_UNAVAILABLE,
    }
}
