use worker::{Response, Result, Url};

use super::{invalid_parameter, read_operands, render};
use crate::calculator::{Operation, evaluate_log};
use crate::utils::{get_log_base_param, parse_query_params};

/// 対数エンドポイントのハンドラー
/// GET /math/log?a=X&b=Y&base=manual|e|10
///
/// `a` が真数、`b` が底です。`base` に `e` または `10` を指定すると `b` は無視されます。
pub fn handle(url: &Url) -> Result<Response> {
    let params = parse_query_params(url);
    let parsed = read_operands(&params)
        .and_then(|(a, b)| Ok((a, b, get_log_base_param(&params, "base")?)));
    let (a, b, base) = match parsed {
        Ok(values) => values,
        Err(e) => return invalid_parameter(&e),
    };

    render(
        Operation::Logarithm,
        a,
        base.resolve(b),
        evaluate_log(a, base, b),
    )
}
