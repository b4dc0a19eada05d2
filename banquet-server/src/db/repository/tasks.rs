//! Task Repository

use shared::models::{Comment, Task, TaskUpdate};

use super::{JsonStore, StoreError, StoreResult};

pub const TASKS_FILE: &str = "tasks.json";

#[derive(Clone)]
pub struct TaskRepository {
    store: JsonStore,
}

impl TaskRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Task>> {
        self.store.read_or(TASKS_FILE, Vec::new).await
    }

    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<Task>> {
        Ok(self.find_all().await?.into_iter().find(|t| t.id == id))
    }

    async fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        self.store.write(TASKS_FILE, tasks).await
    }

    /// New tasks go to the front of the list
    pub async fn create(&self, task: Task) -> StoreResult<Task> {
        let mut tasks = self.find_all().await?;
        if tasks.iter().any(|t| t.id == task.id) {
            return Err(StoreError::Duplicate(format!("task {}", task.id)));
        }
        tasks.insert(0, task.clone());
        self.save(&tasks).await?;
        Ok(task)
    }

    /// Run `f` on one task and persist; `None` when the task does not exist
    async fn modify<F>(&self, id: &str, f: F) -> StoreResult<Option<Task>>
    where
        F: FnOnce(&mut Task) -> StoreResult<()>,
    {
        let mut tasks = self.find_all().await?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        f(task)?;
        let updated = task.clone();
        self.save(&tasks).await?;
        Ok(Some(updated))
    }

    pub async fn update(&self, id: &str, data: TaskUpdate) -> StoreResult<Option<Task>> {
        self.modify(id, |task| data.apply_to(task).map_err(StoreError::Validation))
            .await
    }

    pub async fn add_comment(&self, id: &str, comment: Comment) -> StoreResult<Option<Task>> {
        self.modify(id, |task| {
            task.add_comment(comment);
            Ok(())
        })
        .await
    }

    /// todo -> in_progress -> done -> todo
    pub async fn advance_status(&self, id: &str) -> StoreResult<Option<Task>> {
        self.modify(id, |task| {
            task.status = task.status.next();
            Ok(())
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut tasks = self.find_all().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.save(&tasks).await?;
        Ok(true)
    }

    /// Replace every task (generation, clear)
    pub async fn replace_all(&self, tasks: &[Task]) -> StoreResult<()> {
        self.save(tasks).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{TaskCreate, TaskStatus};

    fn task(title: &str) -> Task {
        TaskCreate {
            title: title.to_string(),
            ..Default::default()
        }
        .into_task(Utc::now())
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TaskRepository::new(JsonStore::new(dir.path()));

        repo.create(task("first")).await.unwrap();
        let second = repo.create(task("second")).await.unwrap();
        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].title, "second");
        assert_eq!(all[1].title, "first");

        assert!(matches!(
            repo.create(second).await,
            Err(StoreError::Duplicate(_))
        ));
    }

    #[tokio::test]
    async fn test_status_cycle_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TaskRepository::new(JsonStore::new(dir.path()));
        let t = repo.create(task("venue")).await.unwrap();

        let t = repo.advance_status(&t.id).await.unwrap().unwrap();
        assert_eq!(t.status, TaskStatus::InProgress);
        let t = repo.advance_status(&t.id).await.unwrap().unwrap();
        assert_eq!(t.status, TaskStatus::Done);
        let t = repo.advance_status(&t.id).await.unwrap().unwrap();
        assert_eq!(t.status, TaskStatus::Todo);

        let comment = Comment::new("booked", None, Utc::now());
        let t = repo.add_comment(&t.id, comment).await.unwrap().unwrap();
        assert_eq!(t.comments.len(), 1);
        assert_eq!(t.comments[0].author, "Current User");

        assert!(repo.advance_status("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_bad_date_without_change() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TaskRepository::new(JsonStore::new(dir.path()));
        let t = repo.create(task("menu")).await.unwrap();

        let bad = TaskUpdate {
            title: Some("renamed".to_string()),
            due_date: Some("not a date".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            repo.update(&t.id, bad).await,
            Err(StoreError::Validation(_))
        ));
        assert_eq!(repo.find_by_id(&t.id).await.unwrap().unwrap().title, "menu");

        assert!(repo.delete(&t.id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
