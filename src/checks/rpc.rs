use super::expect_data;
use crate::models::{CheckError, JsonRpcRequest, JsonRpcResponse};
use crate::services::RelayerApiTrait;

/// Forwards a JSON-RPC call through the relayer. The response must echo the
/// request id and carry either a result or an error. A `null` result counts
/// as a result.
pub async fn check_rpc_passthrough<A>(
    api: &A,
    relayer_id: &str,
    request: JsonRpcRequest,
) -> Result<JsonRpcResponse, CheckError>
where
    A: RelayerApiTrait + ?Sized,
{
    let request_id = request.id.clone();
    let response = expect_data(api.rpc(relayer_id, request).await?, "rpc")?;

    if response.id.as_ref() != Some(&request_id) {
        return Err(CheckError::Assertion(format!(
            "rpc response id {:?} does not match request id {:?}",
            response.id, request_id
        )));
    }

    if response.result.is_none() && response.error.is_none() {
        return Err(CheckError::Assertion(
            "rpc response has neither result nor error".to_string(),
        ));
    }

    Ok(response)
}
