//! User repository
//!
//! All statements are parameterized and run on the connection of the
//! session that created the repository. Multi-row reads are ordered by `id`
//! so listings and pages are stable.

use sqlx::SqliteConnection;

use crate::error::Result;
use crate::models::{NewUser, Page, User};

/// User repository bound to one session's connection
pub struct UserRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> UserRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Exact-match lookup by username.
    pub async fn find_by_username(&mut self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(user)
    }

    /// Every user, in id order.
    pub async fn list(&mut self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password FROM users ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(users)
    }

    /// Users whose username or email contains `term`.
    ///
    /// `%`, `_` and `\` in `term` match themselves. Case folding follows
    /// SQLite's `LIKE` (ASCII letters only).
    pub async fn search(&mut self, term: &str) -> Result<Vec<User>> {
        let pattern = contains_pattern(term);
        let users = sqlx::query_as::<_, User>(
            r"
            SELECT id, username, email, password FROM users
            WHERE username LIKE ? ESCAPE '\' OR email LIKE ? ESCAPE '\'
            ORDER BY id
            ",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(users)
    }

    /// One window of the id-ordered user list.
    pub async fn page(&mut self, page: Page) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password FROM users ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(users)
    }

    /// Insert a user and return it with its assigned id.
    ///
    /// A duplicate username or email fails with a unique violation
    /// (see [`crate::Error::is_unique_violation`]).
    pub async fn insert(&mut self, new_user: &NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password) VALUES (?, ?, ?)
            RETURNING id, username, email, password
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(user)
    }

    /// Set the email of the user with `id`, returning the updated row.
    pub async fn update_email(&mut self, id: i64, email: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET email = ? WHERE id = ?
            RETURNING id, username, email, password
            "#,
        )
        .bind(email)
        .bind(id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(user)
    }

    /// Delete the user with `id`. Returns the number of rows removed.
    pub async fn delete(&mut self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&mut self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}

/// `LIKE` pattern matching any value that contains `term` literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn seeded() -> Database {
        let mut db = Database::in_memory().await.unwrap();
        let mut session = db.session().await.unwrap();
        for (name, email) in [
            ("alice", "alice@example.com"),
            ("bob", "bob@mail.com"),
            ("carol", "carol_c@example.org"),
        ] {
            session
                .users()
                .insert(&NewUser::new(name, email, "secret"))
                .await
                .unwrap();
        }
        session.commit().await.unwrap();
        db
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("bob"), "%bob%");
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let mut db = seeded().await;
        let mut session = db.session().await.unwrap();
        let users = session.users().list().await.unwrap();

        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].password, "secret");
    }

    #[tokio::test]
    async fn search_matches_username_or_email() {
        let mut db = seeded().await;
        let mut session = db.session().await.unwrap();
        let mut repo = session.users();

        let by_name: Vec<String> = repo
            .search("car")
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(by_name, vec!["carol"]);

        let by_domain: Vec<String> = repo
            .search("example")
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(by_domain, vec!["alice", "carol"]);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let mut db = seeded().await;
        let mut session = db.session().await.unwrap();
        let mut repo = session.users();

        // "_" only appears in carol's email
        let underscored = repo.search("_").await.unwrap();
        assert_eq!(underscored.len(), 1);
        assert_eq!(underscored[0].username, "carol");

        assert!(repo.search("%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_folds_ascii_case() {
        let mut db = seeded().await;
        let mut session = db.session().await.unwrap();
        let found = session.users().search("BOB").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "bob");
    }

    #[tokio::test]
    async fn page_windows_in_id_order() {
        let mut db = seeded().await;
        let mut session = db.session().await.unwrap();
        let mut repo = session.users();

        let second = repo.page(Page::new(1, 1)).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].username, "bob");

        let tail = repo.page(Page::new(10, 2)).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].username, "carol");

        assert!(repo.page(Page::new(0, 0)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_by_id() {
        let mut db = seeded().await;
        let mut session = db.session().await.unwrap();
        let mut repo = session.users();

        let bob = repo.find_by_username("bob").await.unwrap().unwrap();
        let updated = repo.update_email(bob.id, "robert@mail.com").await.unwrap();
        assert_eq!(updated.id, bob.id);
        assert_eq!(updated.email, "robert@mail.com");

        assert_eq!(repo.delete(bob.id).await.unwrap(), 1);
        assert_eq!(repo.delete(bob.id).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
