use worker::{Response, Result, Url};

use super::{invalid_parameter, read_operands, render};
use crate::calculator::{Operation, evaluate};
use crate::handlers::general::not_found;
use crate::utils::parse_query_params;

/// 二項演算エンドポイントのハンドラー
/// GET /math/{add,sub,mul,div,mod,pow}?a=X&b=Y
pub fn handle(url: &Url) -> Result<Response> {
    let Some(operation) = operation_for_path(url.path()) else {
        return not_found(url.path());
    };

    let params = parse_query_params(url);
    let (a, b) = match read_operands(&params) {
        Ok(operands) => operands,
        Err(e) => return invalid_parameter(&e),
    };

    render(operation, a, b, evaluate(operation, a, b))
}

/// `/math/{name}` から二項演算を取り出す
///
/// 対数は底の指定を受け付ける専用ハンドラーで処理するため含めません。
fn operation_for_path(path: &str) -> Option<Operation> {
    let operation = path.strip_prefix("/math/")?.parse::<Operation>().ok()?;
    (operation != Operation::Logarithm).then_some(operation)
}
