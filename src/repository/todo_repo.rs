//! ToDo repository (数据库访问层)
//! 所有查询都以 owner_id 为过滤条件；update/delete 通过
//! `WHERE id AND owner_id` 的单条条件语句完成存在性+归属检查

use crate::{
    error::AppError,
    models::todo::{ListTodosQuery, Todo, UpdateTodoRequest},
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct TodoRepository {
    db: PgPool,
}

/// 构造列表查询 SQL
/// owner_id 恒为 $1；status/priority 相等过滤按需追加；completed 子句
/// 总是追加在最后（true 时仅保留已完成项，false 时排除已完成项）。
/// 排序：created_at 降序，id 升序兜底（同一时间戳按插入顺序）
fn build_list_query(query: &ListTodosQuery) -> String {
    let mut sql = String::from("SELECT * FROM todos WHERE owner_id = $1");
    let mut index = 1;

    if query.status.is_some() {
        index += 1;
        sql.push_str(&format!(" AND status = ${}", index));
    }
    if query.priority.is_some() {
        index += 1;
        sql.push_str(&format!(" AND priority = ${}", index));
    }

    if query.completed {
        sql.push_str(" AND status = 'completed'");
    } else {
        sql.push_str(" AND status <> 'completed'");
    }

    sql.push_str(" ORDER BY created_at DESC, id ASC");
    sql
}

impl TodoRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建待办事项，created_at 由数据库在插入时设置
    pub async fn create(
        &self,
        owner_id: Uuid,
        content: &str,
        priority: &str,
        status: &str,
    ) -> Result<Todo, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (owner_id, content, priority, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(content)
        .bind(priority)
        .bind(status)
        .fetch_one(&self.db)
        .await?;

        Ok(todo)
    }

    /// 列出调用者的待办事项
    pub async fn list(&self, owner_id: Uuid, query: &ListTodosQuery) -> Result<Vec<Todo>, AppError> {
        let sql = build_list_query(query);

        let mut query_builder = sqlx::query_as::<_, Todo>(&sql).bind(owner_id);

        if let Some(status) = query.status {
            query_builder = query_builder.bind(status.as_str());
        }
        if let Some(priority) = query.priority {
            query_builder = query_builder.bind(priority.as_str());
        }

        let todos = query_builder.fetch_all(&self.db).await?;

        Ok(todos)
    }

    /// 部分更新；零行命中表示不存在或非本人所有，两者不作区分
    pub async fn update(
        &self,
        id: i64,
        owner_id: Uuid,
        req: &UpdateTodoRequest,
    ) -> Result<Option<Todo>, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET
                content = COALESCE($3, content),
                priority = COALESCE($4, priority),
                status = COALESCE($5, status)
            WHERE id = $1 AND owner_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(req.content.as_deref())
        .bind(req.priority.map(|p| p.as_str()))
        .bind(req.status.map(|s| s.as_str()))
        .fetch_optional(&self.db)
        .await?;

        Ok(todo)
    }

    /// 删除；零行命中表示不存在或非本人所有
    pub async fn delete(&self, id: i64, owner_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::todo::{Priority, Status};

    #[test]
    fn test_list_query_default_excludes_completed() {
        let query = ListTodosQuery::default();
        let sql = build_list_query(&query);

        assert_eq!(
            sql,
            "SELECT * FROM todos WHERE owner_id = $1 AND status <> 'completed' \
             ORDER BY created_at DESC, id ASC"
        );
    }

    #[test]
    fn test_list_query_completed_only() {
        let query = ListTodosQuery {
            completed: true,
            ..Default::default()
        };
        let sql = build_list_query(&query);

        assert!(sql.contains("AND status = 'completed'"));
        assert!(!sql.contains("<> 'completed'"));
    }

    #[test]
    fn test_list_query_with_filters() {
        let query = ListTodosQuery {
            status: Some(Status::InProgress),
            priority: Some(Priority::High),
            completed: false,
        };
        let sql = build_list_query(&query);

        assert_eq!(
            sql,
            "SELECT * FROM todos WHERE owner_id = $1 AND status = $2 AND priority = $3 \
             AND status <> 'completed' ORDER BY created_at DESC, id ASC"
        );
    }

    #[test]
    fn test_list_query_completed_clause_applies_even_with_status_filter() {
        // completed=true 与 status 过滤同时给出时两个子句都生效
        let query = ListTodosQuery {
            status: Some(Status::NotStarted),
            priority: None,
            completed: true,
        };
        let sql = build_list_query(&query);

        assert!(sql.contains("AND status = $2"));
        assert!(sql.contains("AND status = 'completed'"));
    }

    #[test]
    fn test_list_query_ordering_is_newest_first_with_stable_ties() {
        let sql = build_list_query(&ListTodosQuery::default());
        assert!(sql.ends_with("ORDER BY created_at DESC, id ASC"));
    }
}
