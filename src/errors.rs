/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use failure::Fail;

/// Returned by `try_inverse` for a matrix whose determinant is exactly zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Fail)]
#[fail(display = "cannot invert a matrix with zero determinant")]
pub struct SingularMatrixError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message() {
        assert_eq!(
            SingularMatrixError.to_string(),
            "cannot invert a matrix with zero determinant",
        );
    }
}
