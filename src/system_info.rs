// devops-info-service - Host metadata

use serde::Serialize;
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use utoipa::ToSchema;

const UNKNOWN: &str = "unknown";

/// Read-only host queries. Every method is best effort; `None` means the
/// platform could not answer.
pub trait HostProbe: Send + Sync {
    fn hostname(&self) -> Option<String>;
    fn platform(&self) -> String;
    fn long_platform_version(&self) -> Option<String>;
    fn architecture(&self) -> String;
    fn cpu_count(&self) -> Option<usize>;
    fn rust_version(&self) -> Option<String>;
}

/// `HostProbe` backed by `sysinfo` and the build environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProbe;

impl HostProbe for SysinfoProbe {
    fn hostname(&self) -> Option<String> {
        System::host_name()
    }

    fn platform(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn long_platform_version(&self) -> Option<String> {
        System::long_os_version()
    }

    fn architecture(&self) -> String {
        std::env::consts::ARCH.to_string()
    }

    fn cpu_count(&self) -> Option<usize> {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()),
        );
        match sys.cpus().len() {
            0 => None,
            n => Some(n),
        }
    }

    fn rust_version(&self) -> Option<String> {
        match env!("BUILD_RUSTC_VERSION") {
            UNKNOWN => None,
            v => Some(v.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub rust_version: String,
}

impl SystemInfo {
    /// Query the probe afresh. Nothing is cached between calls.
    pub fn collect(probe: &dyn HostProbe) -> Self {
        let platform = probe.platform();
        let platform_version = probe
            .long_platform_version()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::debug!("extended platform version unavailable, using platform name");
                platform.clone()
            });

        Self {
            hostname: probe
                .hostname()
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            platform,
            platform_version,
            architecture: probe.architecture(),
            cpu_count: probe.cpu_count().unwrap_or(0),
            rust_version: probe.rust_version().unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareProbe;

    impl HostProbe for BareProbe {
        fn hostname(&self) -> Option<String> {
            Some(String::new())
        }
        fn platform(&self) -> String {
            "linux".to_string()
        }
        fn long_platform_version(&self) -> Option<String> {
            None
        }
        fn architecture(&self) -> String {
            "x86_64".to_string()
        }
        fn cpu_count(&self) -> Option<usize> {
            None
        }
        fn rust_version(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_fallbacks_when_probe_knows_nothing() {
        let info = SystemInfo::collect(&BareProbe);
        assert_eq!(info.hostname, "unknown");
        assert_eq!(info.platform_version, "linux");
        assert_eq!(info.cpu_count, 0);
        assert_eq!(info.rust_version, "unknown");
    }

    #[test]
    fn test_real_host_answers() {
        let info = SystemInfo::collect(&SysinfoProbe);
        assert!(!info.hostname.is_empty());
        assert_eq!(info.platform, std::env::consts::OS);
        assert_eq!(info.architecture, std::env::consts::ARCH);
        assert!(!info.platform_version.is_empty());
    }
}
