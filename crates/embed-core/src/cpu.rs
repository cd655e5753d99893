//! Cached CPU capability detection
//!
//! Capabilities are probed once per process on first use and never change
//! afterwards, so every dispatch decision made from them is stable.

use bitflags::bitflags;
use std::sync::OnceLock;

bitflags! {
    /// Instruction set extensions relevant to the lookup kernels
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CpuFeatures: u32 {
        /// 256-bit integer and float vectors
        const AVX2 = 0b0000_0001;
        /// Fused multiply-add
        const FMA = 0b0000_0010;
        /// Half precision conversion instructions
        const F16C = 0b0000_0100;
    }
}

impl CpuFeatures {
    /// Everything the AVX2 row primitives need
    pub const AVX2_FMA: Self = Self::AVX2.union(Self::FMA).union(Self::F16C);

    /// Probe the running CPU (uncached)
    pub fn detect() -> Self {
        #[allow(unused_mut)]
        let mut features = Self::empty();
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx2") {
                features |= Self::AVX2;
            }
            if is_x86_feature_detected!("fma") {
                features |= Self::FMA;
            }
            if is_x86_feature_detected!("f16c") {
                features |= Self::F16C;
            }
        }
        features
    }

    /// Whether the AVX2 row primitives can run on this CPU
    pub fn supports_avx2_fma(self) -> bool {
        self.contains(Self::AVX2_FMA)
    }
}

static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// Process-wide CPU capabilities, detected on first call
#[inline]
pub fn cpu_features() -> CpuFeatures {
    *CPU_FEATURES.get_or_init(|| {
        let features = CpuFeatures::detect();
        log::debug!("Detected CPU features: {features:?}");
        features
    })
}
