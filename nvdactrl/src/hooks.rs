//! Loader-written function-pointer slots.
//!
//! The export shim forwards every entry point through a process-wide
//! function pointer that an external loader writes after the library is
//! mapped. Each slot is exported as a data symbol, so it must be exactly
//! one pointer wide and hold a raw pointer value the loader can poke
//! directly. [`HookSlot`] gives that raw cell a typed, atomic face.

use std::marker::PhantomData;
use std::mem;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

use crate::status::ErrorStatus;

/// `nvdaController_speakText` backing function.
pub type SpeakTextFn = unsafe extern "system" fn(text: *const u16) -> ErrorStatus;

/// `nvdaController_cancelSpeech` backing function.
pub type CancelSpeechFn = unsafe extern "system" fn() -> ErrorStatus;

/// `nvdaController_brailleMessage` backing function.
pub type BrailleMessageFn = unsafe extern "system" fn(text: *const u16) -> ErrorStatus;

/// `nvdaController_inputLangChangeNotify` backing function.
pub type InputLangChangeFn =
    unsafe extern "system" fn(thread_id: i32, hkl: u32, layout: *const u16) -> ErrorStatus;

/// A single loader-populated function-pointer slot.
///
/// `#[repr(transparent)]` over an `AtomicPtr`, so an exported
/// `static HookSlot<F>` has the same layout as the C
/// `__declspec(dllexport)` function-pointer variable it replaces: the
/// loader writes one pointer-sized value, unsynchronized with our reads,
/// hence the atomic. Release/Acquire pairing makes a populated slot
/// visible to any thread that subsequently calls the entry point.
#[repr(transparent)]
pub struct HookSlot<F> {
    raw: AtomicPtr<()>,
    _typed: PhantomData<F>,
}

impl<F: Copy> HookSlot<F> {
    // Slots are written as bare pointers; a fat or zero-sized F would
    // corrupt the exported symbol.
    const POINTER_SIZED: () = assert!(mem::size_of::<F>() == mem::size_of::<*mut ()>());

    /// An unpopulated slot.
    pub const fn empty() -> Self {
        Self {
            raw: AtomicPtr::new(ptr::null_mut()),
            _typed: PhantomData,
        }
    }

    /// Populate the slot, as the loader does through the exported symbol.
    pub fn set(&self, hook: F) {
        let () = Self::POINTER_SIZED;
        // SAFETY: F is a pointer-sized fn pointer (checked above).
        let raw = unsafe { mem::transmute_copy::<F, *mut ()>(&hook) };
        self.raw.store(raw, Ordering::Release);
    }

    /// Return the slot to its unpopulated state.
    pub fn clear(&self) {
        self.raw.store(ptr::null_mut(), Ordering::Release);
    }

    /// Current hook, if the loader has populated the slot.
    pub fn get(&self) -> Option<F> {
        let () = Self::POINTER_SIZED;
        let raw = self.raw.load(Ordering::Acquire);
        if raw.is_null() {
            None
        } else {
            // SAFETY: non-null values only enter via set() or the loader,
            // both of which write a valid F.
            Some(unsafe { mem::transmute_copy::<*mut (), F>(&raw) })
        }
    }
}
