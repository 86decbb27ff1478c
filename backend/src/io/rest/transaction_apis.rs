//! # REST API for Transactions
//!
//! Controllers behind the `/api/transactions` routes. They contain no error
//! handling of their own: failures are returned as [`ApiError`](super::ApiError) and forwarded
//! by the controller wrapper.

use axum::{extract::State, http::StatusCode, Json};
use shared::{
    CreateTransactionRequest, DeleteTransactionResponse, Transaction, TransactionListResponse,
};
use tracing::info;

use super::error::{ApiJson, ApiPath, ApiResult};
use super::mappers::transaction_mapper::TransactionMapper;
use crate::AppState;

/// Record a transaction of the type named in the path
pub async fn add_transaction(
    State(state): State<AppState>,
    ApiPath(transaction_type): ApiPath<String>,
    ApiJson(request): ApiJson<CreateTransactionRequest>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    info!("POST /api/transactions/{} - request: {:?}", transaction_type, request);

    let transaction = state
        .transaction_service
        .create_transaction(&transaction_type, request)
        .await?;

    Ok((StatusCode::CREATED, Json(TransactionMapper::to_dto(transaction))))
}

/// List every transaction, newest first, with their total
pub async fn get_all_transactions(
    State(state): State<AppState>,
) -> ApiResult<Json<TransactionListResponse>> {
    info!("GET /api/transactions");

    let transactions = state.transaction_service.list_transactions().await?;
    Ok(Json(TransactionListResponse::new(TransactionMapper::to_dto_list(
        transactions,
    ))))
}

/// List the transactions of the type named in the path
pub async fn get_all_transactions_of_type(
    State(state): State<AppState>,
    ApiPath(transaction_type): ApiPath<String>,
) -> ApiResult<Json<TransactionListResponse>> {
    info!("GET /api/transactions/{}", transaction_type);

    let transactions = state
        .transaction_service
        .list_transactions_of_type(&transaction_type)
        .await?;
    Ok(Json(TransactionListResponse::new(TransactionMapper::to_dto_list(
        transactions,
    ))))
}

/// Delete the transaction with the id named in the path
pub async fn remove_transaction_by_id(
    State(state): State<AppState>,
    ApiPath(transaction_id): ApiPath<String>,
) -> ApiResult<Json<DeleteTransactionResponse>> {
    info!("DELETE /api/transactions/{}", transaction_id);

    let transaction = state
        .transaction_service
        .delete_transaction(&transaction_id)
        .await?;

    Ok(Json(DeleteTransactionResponse {
        success_message: format!("Transaction {} deleted", transaction.id),
        transaction: TransactionMapper::to_dto(transaction),
    }))
}
