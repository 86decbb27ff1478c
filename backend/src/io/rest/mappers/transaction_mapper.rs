use crate::domain::models::transaction::Transaction as DomainTransaction;
use shared::Transaction as SharedTransaction;

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            date: DomainTransaction::format_date(&domain.date),
            created_at: DomainTransaction::format_date(&domain.created_at),
            id: domain.id,
            transaction_type: domain.transaction_type,
            description: domain.description,
            category: domain.category,
            amount: domain.amount,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainTransaction>) -> Vec<SharedTransaction> {
        domain.into_iter().map(Self::to_dto).collect()
    }
}
