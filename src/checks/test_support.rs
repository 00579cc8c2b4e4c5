use crate::models::{
    ApiResponse, PaginationMeta, RelayerNetworkType, RelayerResponse, RelayerStatus,
    TransactionResponse, TransactionStatus,
};
use crate::services::SdkResponse;

pub fn relayer(id: &str, paused: bool) -> RelayerResponse {
    RelayerResponse {
        id: id.to_string(),
        name: "Anvil Relayer".to_string(),
        network: "localhost".to_string(),
        network_type: RelayerNetworkType::Evm,
        paused,
        policies: None,
        signer_id: "local-signer".to_string(),
        notification_id: None,
        custom_rpc_urls: None,
        address: Some("0x2c7536e3605d9c16a7a3d7b1898e529396a65c23".to_string()),
        system_disabled: Some(false),
    }
}

pub fn evm_status(paused: bool) -> RelayerStatus {
    RelayerStatus::Evm {
        balance: "10000000000000000000000".to_string(),
        pending_transactions_count: 0,
        last_confirmed_transaction_timestamp: None,
        system_disabled: false,
        paused,
        nonce: "0".to_string(),
    }
}

pub fn transaction(id: &str) -> TransactionResponse {
    TransactionResponse {
        id: id.to_string(),
        status: TransactionStatus::Pending,
        relayer_id: Some("anvil".to_string()),
        hash: None,
        nonce: None,
        from: None,
        to: Some("0xc834dcdc9a074dbbadcc71584789ae4b463db116".to_string()),
        value: None,
        status_reason: None,
        created_at: None,
        sent_at: None,
        confirmed_at: None,
    }
}

pub fn ok<T>(data: T) -> SdkResponse<T> {
    SdkResponse::ok(ApiResponse::success(data))
}

pub fn transaction_page(
    ids: &[&str],
    current_page: u32,
    per_page: u32,
    total_items: u64,
) -> SdkResponse<Vec<TransactionResponse>> {
    let data = ids.iter().map(|id| transaction(id)).collect();
    SdkResponse::ok(ApiResponse::paginated(
        data,
        PaginationMeta {
            current_page,
            per_page,
            total_items,
        },
    ))
}
