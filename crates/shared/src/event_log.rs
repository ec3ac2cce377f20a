//! # ビジネスイベントログ
//!
//! 配信結果などの業務上のイベントを、`jq` で抽出しやすい形の構造化ログとして出す。
//! [`log_business_event!`] は `event.kind = "business_event"` を自動で付与するので、
//! `jq 'select(.["event.kind"] == "business_event")'` で絞り込める。
//!
//! フィールド名はドット記法（`event.category`, `action.name` など）で統一する。

/// ビジネスイベントを `info` レベルで出力する
///
/// 慣例として `event.category`, `event.action`, `event.result` を必ず付ける。
/// 値は [`event`] の定数を使う。
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const ACTION: &str = "action";
    }

    /// イベントアクション
    pub mod action {
        pub const ACTION_DELIVERED: &str = "action.delivered";
        pub const ACTION_FAILED: &str = "action.failed";
        pub const ACTION_REJECTED: &str = "action.rejected";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}
