use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait, SqlErr, TransactionError, TransactionTrait,
};

use backoffice_staffs_schema::staffs;

use crate::domain::repository::StaffRepository;
use crate::domain::types::{Staff, StaffRecord};
use crate::error::StaffsServiceError;

// ── Staff repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStaffRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, thiserror::Error)]
enum SaveError {
    #[error("activated email already taken")]
    EmailTaken,
    #[error(transparent)]
    Db(#[from] DbErr),
}

async fn activated_email_taken<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    except_id: Option<i32>,
) -> Result<bool, DbErr> {
    let count = staffs::Entity::find()
        .filter(staffs::Column::Activated.eq(true))
        .filter(staffs::Column::Email.eq(email))
        .apply_if(except_id, |query, id| query.filter(staffs::Column::Id.ne(id)))
        .count(conn)
        .await?;
    Ok(count > 0)
}

impl StaffRepository for DbStaffRepository {
    async fn find_all(&self) -> Result<Vec<Staff>, StaffsServiceError> {
        let models = staffs::Entity::find()
            .order_by_asc(staffs::Column::Id)
            .all(&self.db)
            .await
            .context("find all staffs")?;
        Ok(models.into_iter().map(staff_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Staff>, StaffsServiceError> {
        let model = staffs::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find staff by id")?;
        Ok(model.map(staff_from_model))
    }

    async fn activated_email_taken(
        &self,
        email: &str,
        except_id: Option<i32>,
    ) -> Result<bool, StaffsServiceError> {
        let taken = activated_email_taken(&self.db, email, except_id)
            .await
            .context("check activated email")?;
        Ok(taken)
    }

    async fn save(&self, record: &StaffRecord) -> Result<Staff, StaffsServiceError> {
        let record = record.clone();
        let result = self
            .db
            .transaction::<_, staffs::Model, SaveError>(|txn| {
                Box::pin(async move {
                    if record.activated
                        && activated_email_taken(txn, &record.email, record.id).await?
                    {
                        return Err(SaveError::EmailTaken);
                    }
                    let now = Utc::now();
                    let model = match record.id {
                        None => {
                            staffs::ActiveModel {
                                id: NotSet,
                                name: Set(record.name),
                                email: Set(record.email),
                                password_digest: Set(record.password_digest),
                                activated: Set(record.activated),
                                admin: Set(record.admin),
                                created_at: Set(now),
                                updated_at: Set(now),
                            }
                            .insert(txn)
                            .await?
                        }
                        Some(id) => {
                            staffs::ActiveModel {
                                id: Set(id),
                                name: Set(record.name),
                                email: Set(record.email),
                                password_digest: Set(record.password_digest),
                                activated: Set(record.activated),
                                admin: Set(record.admin),
                                created_at: NotSet,
                                updated_at: Set(now),
                            }
                            .update(txn)
                            .await?
                        }
                    };
                    Ok(model)
                })
            })
            .await;

        match result {
            Ok(model) => Ok(staff_from_model(model)),
            Err(TransactionError::Transaction(SaveError::EmailTaken)) => {
                Err(StaffsServiceError::email_taken())
            }
            Err(TransactionError::Transaction(SaveError::Db(err)))
            | Err(TransactionError::Connection(err)) => Err(save_error(err)),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, StaffsServiceError> {
        let result = staffs::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete staff")?;
        Ok(result.rows_affected > 0)
    }
}

/// The partial unique index is the last word on activated-email uniqueness:
/// a concurrent activation that slipped past the in-transaction check lands here.
fn save_error(err: DbErr) -> StaffsServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return StaffsServiceError::email_taken();
    }
    match err {
        DbErr::RecordNotUpdated => StaffsServiceError::StaffNotFound,
        other => StaffsServiceError::Internal(anyhow::Error::new(other).context("save staff")),
    }
}

fn staff_from_model(model: staffs::Model) -> Staff {
    Staff {
        id: model.id,
        name: model.name,
        email: model.email,
        password_digest: model.password_digest,
        activated: model.activated,
        admin: model.admin,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
