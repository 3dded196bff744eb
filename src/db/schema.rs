//! Database schema and migrations for NAITE.
//!
//! Migrations are applied in order; `schema_version` records how many
//! have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: users
    r#"
CREATE TABLE users (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    login_id        TEXT NOT NULL UNIQUE,
    nickname        TEXT NOT NULL,
    email           TEXT NOT NULL UNIQUE,
    password_hash   TEXT NOT NULL,           -- PHC string
    password_salt   TEXT NOT NULL,
    created_at      TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
    // v2: boards
    r#"
CREATE TABLE boards (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id         INTEGER NOT NULL REFERENCES users(id),
    title           TEXT NOT NULL,
    content         TEXT NOT NULL,
    pic             TEXT,
    unknown_flag    INTEGER NOT NULL DEFAULT 0,
    open_flag       INTEGER NOT NULL DEFAULT 1,
    big_category_no INTEGER NOT NULL,
    like_count      INTEGER NOT NULL DEFAULT 0 CHECK (like_count >= 0),
    is_deleted      INTEGER NOT NULL DEFAULT 0,
    created_at      TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_boards_live_created ON boards(is_deleted, created_at);
CREATE INDEX idx_boards_category ON boards(big_category_no, is_deleted);
CREATE INDEX idx_boards_user_id ON boards(user_id);
"#,
    // v3: likes (one per user and board)
    r#"
CREATE TABLE board_likes (
    user_id     INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    board_id    INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
    PRIMARY KEY (user_id, board_id)
);

CREATE INDEX idx_board_likes_board_id ON board_likes(board_id);
"#,
    // v4: reviews referencing exactly one board
    r#"
CREATE TABLE reviews (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    board_id            INTEGER NOT NULL UNIQUE REFERENCES boards(id),
    review_star         INTEGER NOT NULL,
    small_category_no   INTEGER NOT NULL
);

CREATE INDEX idx_reviews_small_category ON reviews(small_category_no);
"#,
];
