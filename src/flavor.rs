//! SQL Flavor（方言）：决定标识符引号与字面量格式；同时提供进程级默认 Flavor。

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 方言枚举，内置 [`crate::formatter::SqlFormatter`] 实现。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    CQL,
    ClickHouse,
    Presto,
    Oracle,
    Informix,
    Doris,
}

const ALL_FLAVORS: [Flavor; 10] = [
    Flavor::MySQL,
    Flavor::PostgreSQL,
    Flavor::SQLite,
    Flavor::SQLServer,
    Flavor::CQL,
    Flavor::ClickHouse,
    Flavor::Presto,
    Flavor::Oracle,
    Flavor::Informix,
    Flavor::Doris,
];

static DEFAULT_FLAVOR: AtomicU8 = AtomicU8::new(Flavor::MySQL as u8);
static DEFAULT_FLAVOR_LOCK: Mutex<()> = Mutex::new(());

impl Flavor {
    fn from_u8(v: u8) -> Self {
        ALL_FLAVORS
            .get(v as usize)
            .copied()
            .unwrap_or(Self::MySQL)
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn all() -> &'static [Flavor] {
        &ALL_FLAVORS
    }

    /// 标识符使用的引号字符。
    pub fn quote_char(self) -> char {
        match self {
            Self::MySQL | Self::ClickHouse | Self::Doris => '`',
            Self::PostgreSQL
            | Self::SQLServer
            | Self::SQLite
            | Self::Presto
            | Self::Oracle
            | Self::Informix => '"',
            Self::CQL => '\'',
        }
    }

    /// 给单个标识符加引号；内部出现的引号字符会被双写。
    pub fn quote(self, name: &str) -> String {
        let q = self.quote_char();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(q);
        for ch in name.chars() {
            if ch == q {
                out.push(q);
            }
            out.push(ch);
        }
        out.push(q);
        out
    }
}

/// 获取当前进程级默认 Flavor。
pub fn default_flavor() -> Flavor {
    Flavor::from_u8(DEFAULT_FLAVOR.load(Ordering::Relaxed))
}

/// 设置进程级默认 Flavor，返回旧值。
pub fn set_default_flavor(flavor: Flavor) -> Flavor {
    let old = DEFAULT_FLAVOR.swap(flavor.to_u8(), Ordering::Relaxed);
    Flavor::from_u8(old)
}

/// 修改默认 Flavor 的 RAII guard（会持有一个全局锁，避免并行测试互相干扰）。
pub struct DefaultFlavorGuard {
    _lock: MutexGuard<'static, ()>,
    old: Flavor,
}

impl Drop for DefaultFlavorGuard {
    fn drop(&mut self) {
        set_default_flavor(self.old);
    }
}

/// 在一个作用域内临时设置默认 Flavor，退出作用域后自动恢复。
pub fn set_default_flavor_scoped(flavor: Flavor) -> DefaultFlavorGuard {
    let lock = DEFAULT_FLAVOR_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_flavor(flavor);
    DefaultFlavorGuard { _lock: lock, old }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::CQL => "CQL",
            Self::ClickHouse => "ClickHouse",
            Self::Presto => "Presto",
            Self::Oracle => "Oracle",
            Self::Informix => "Informix",
            Self::Doris => "Doris",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sql flavor '{0}'")]
pub struct ParseFlavorError(pub String);

impl FromStr for Flavor {
    type Err = ParseFlavorError;

    /// 按 `Display` 名称解析，忽略大小写。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FLAVORS
            .iter()
            .copied()
            .find(|f| f.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFlavorError(s.to_string()))
    }
}
