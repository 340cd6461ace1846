//! 待办事项服务：查询与 CRUD
//! 所有操作都以调用者身份为作用域

use crate::{
    error::AppError,
    models::todo::{CreateTodoRequest, ListTodosQuery, TodoResponse, UpdateTodoRequest},
    repository::todo_repo::TodoRepository,
};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// 不存在与非本人所有统一使用的提示语
const TODO_NOT_FOUND: &str = "ToDo not found";

pub struct TodoService {
    db: PgPool,
}

impl TodoService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出调用者的待办事项
    pub async fn list(
        &self,
        owner_id: Uuid,
        query: &ListTodosQuery,
    ) -> Result<Vec<TodoResponse>, AppError> {
        let repo = TodoRepository::new(self.db.clone());
        let todos = repo.list(owner_id, query).await?;

        Ok(todos.into_iter().map(TodoResponse::from).collect())
    }

    /// 创建待办事项
    pub async fn create(
        &self,
        owner_id: Uuid,
        req: CreateTodoRequest,
    ) -> Result<TodoResponse, AppError> {
        req.validate()?;
        // 纯空白内容同样视为空
        if req.content.trim().is_empty() {
            return Err(AppError::Validation("content: must not be empty".to_string()));
        }

        let repo = TodoRepository::new(self.db.clone());
        let todo = repo
            .create(owner_id, &req.content, req.priority.as_str(), req.status.as_str())
            .await?;

        tracing::debug!(todo_id = todo.id, "ToDo created");

        Ok(TodoResponse::from(todo))
    }

    /// 部分更新；缺失的字段保持不变
    pub async fn update(
        &self,
        owner_id: Uuid,
        id: i64,
        req: UpdateTodoRequest,
    ) -> Result<TodoResponse, AppError> {
        if let Some(content) = &req.content {
            if content.trim().is_empty() {
                return Err(AppError::Validation("content: must not be empty".to_string()));
            }
        }

        let repo = TodoRepository::new(self.db.clone());
        let todo = repo
            .update(id, owner_id, &req)
            .await?
            .ok_or_else(|| AppError::NotFound(TODO_NOT_FOUND.to_string()))?;

        Ok(TodoResponse::from(todo))
    }

    /// 删除；重复删除同一 id 第二次返回 NotFound
    pub async fn delete(&self, owner_id: Uuid, id: i64) -> Result<(), AppError> {
        let repo = TodoRepository::new(self.db.clone());
        let deleted = repo.delete(id, owner_id).await?;

        if !deleted {
            return Err(AppError::NotFound(TODO_NOT_FOUND.to_string()));
        }

        tracing::debug!(todo_id = id, "ToDo deleted");

        Ok(())
    }
}
