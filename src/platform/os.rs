//! Operating system names as reported by Go-style `GOOS` values

pub const DARWIN: &str = "darwin";
pub const DRAGONFLY: &str = "dragonfly";
pub const FREEBSD: &str = "freebsd";
pub const LINUX: &str = "linux";
pub const NACL: &str = "nacl";
pub const NETBSD: &str = "netbsd";
pub const OPENBSD: &str = "openbsd";
pub const SOLARIS: &str = "solaris";
pub const WINDOWS: &str = "windows";

/// The recognized Unix-like operating systems
pub const UNIX: [&str; 8] = [
    DARWIN, DRAGONFLY, FREEBSD, LINUX, NACL, NETBSD, OPENBSD, SOLARIS,
];

/// Every recognized operating system
pub const ALL: [&str; 9] = [
    DARWIN, DRAGONFLY, FREEBSD, LINUX, NACL, NETBSD, OPENBSD, SOLARIS, WINDOWS,
];

pub fn is_unix(os: &str) -> bool {
    UNIX.contains(&os)
}

pub fn is_known(os: &str) -> bool {
    ALL.contains(&os)
}
