//! Software prefetch hints for random row gathers

/// Issue a read prefetch for the cache line holding `ptr`
///
/// Uses low temporal locality (T2): a gathered row is usually read once per
/// call. Compiles to nothing on targets without a prefetch intrinsic.
#[inline(always)]
pub fn prefetch_read<T>(ptr: *const T) {
    #[cfg(target_arch = "x86_64")]
    {
        use std::arch::x86_64::{_mm_prefetch, _MM_HINT_T2};
        // Safety: prefetch never faults, and SSE is baseline on x86_64
        unsafe { _mm_prefetch::<_MM_HINT_T2>(ptr as *const i8) };
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let _ = ptr;
    }
}
