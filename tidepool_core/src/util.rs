//! 通用小工具

use crate::error::{Result, TidepoolError};

/// 返回问候语
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// 两数相加，结果超出 `i64` 范围时返回 [`TidepoolError::Overflow`]
pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b)
        .ok_or_else(|| TidepoolError::overflow(format!("{} + {}", a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TidepoolErrorKind;

    #[test]
    fn test_greet() {
        assert_eq!(greet("Ada"), "Hello, Ada!");
        assert_eq!(greet(""), "Hello, !");
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3).unwrap(), 5);
        assert_eq!(add(-4, 4).unwrap(), 0);
        assert_eq!(add(i64::MAX, 0).unwrap(), i64::MAX);
    }

    #[test]
    fn test_add_overflow() {
        let err = add(i64::MAX, 1).unwrap_err();
        assert_eq!(err.kind(), TidepoolErrorKind::Overflow);
        assert!(add(i64::MIN, -1).is_err());
    }
}
