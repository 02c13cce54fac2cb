//! 計算ロジック
//!
//! HTTP層から独立した純粋関数として実装しています。
//! 入力は演算の種類と2つのオペランドのみで、共有状態は持ちません。

mod error;
mod evaluator;
mod operation;

pub use error::{ErrorKind, EvalError, Outcome};
pub use evaluator::{evaluate, evaluate_log};
pub use operation::{LogBase, Operation, ParseLogBaseError, ParseOperationError};
