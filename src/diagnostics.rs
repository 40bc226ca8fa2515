//! Self-description of the backing numerical library.
//!
//! The harness prints whatever [`Diagnostics::describe`] returns and never
//! looks inside it.

/// Anything that can describe the environment the benchmarks ran in.
pub trait Diagnostics {
    /// Free-form, human-readable text. Should end with a newline.
    fn describe(&self) -> String;
}

/// Build and runtime configuration of `ndarray` on this machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NdarrayDiagnostics;

impl Diagnostics for NdarrayDiagnostics {
    fn describe(&self) -> String {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        let detected = detected_simd_features();
        let compiled = compiled_simd_features();

        let mut text = String::new();
        text.push_str("backend:\n");
        text.push_str("    name = ndarray\n");
        text.push_str("    gemm = matrixmultiply\n");
        text.push_str("platform:\n");
        text.push_str(&format!("    arch = {}\n", std::env::consts::ARCH));
        text.push_str(&format!("    os = {}\n", std::env::consts::OS));
        text.push_str(&format!(
            "    profile = {}\n",
            if cfg!(debug_assertions) { "debug" } else { "release" }
        ));
        text.push_str("simd:\n");
        text.push_str(&format!("    compiled = {}\n", feature_list(&compiled)));
        text.push_str(&format!("    detected = {}\n", feature_list(&detected)));
        text.push_str("threads:\n");
        text.push_str(&format!("    available = {threads}\n"));
        text
    }
}

fn feature_list(features: &[&str]) -> String {
    if features.is_empty() {
        "none".to_string()
    } else {
        features.join(" ")
    }
}

/// Features the CPU reports at runtime. matrixmultiply picks its kernel
/// from these.
fn detected_simd_features() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut found = Vec::new();

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("sse2") {
            found.push("sse2");
        }
        if is_x86_feature_detected!("sse4.1") {
            found.push("sse4.1");
        }
        if is_x86_feature_detected!("avx") {
            found.push("avx");
        }
        if is_x86_feature_detected!("avx2") {
            found.push("avx2");
        }
        if is_x86_feature_detected!("fma") {
            found.push("fma");
        }
        if is_x86_feature_detected!("avx512f") {
            found.push("avx512f");
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            found.push("neon");
        }
    }

    found
}

/// Features the binary was compiled to assume.
fn compiled_simd_features() -> Vec<&'static str> {
    let candidates = [
        ("sse2", cfg!(target_feature = "sse2")),
        ("avx", cfg!(target_feature = "avx")),
        ("avx2", cfg!(target_feature = "avx2")),
        ("fma", cfg!(target_feature = "fma")),
        ("avx512f", cfg!(target_feature = "avx512f")),
        ("neon", cfg!(target_feature = "neon")),
    ];
    candidates
        .iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(name, _)| *name)
        .collect()
}
