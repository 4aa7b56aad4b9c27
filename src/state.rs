//! 看板状态模块
//!
//! 将零散的视图状态整合为 `BoardState` 结构体，所有变更通过
//! 纯函数式的转移方法完成，每个方法消费旧状态并返回新状态：
//! - 数据的持有（记录列表 + 输入缓冲 + 可见性开关）
//! - 列表变更时的输入缓冲重置
//! - 搜索过滤的纯投影（不改动存储列表）

use crate::model::CredentialRecord;

/// 看板完整视图状态
///
/// `records` 会被持久化，其余字段均为瞬态，列表变更时文本缓冲清空。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    /// 全部凭据记录，保持插入顺序
    pub records: Vec<CredentialRecord>,
    /// 网站域名输入缓冲
    pub domain_input: String,
    /// 用户名输入缓冲
    pub username_input: String,
    /// 密码输入缓冲
    pub password_input: String,
    /// 搜索关键字缓冲
    pub search_input: String,
    /// 密码明文可见性开关，对所有记录统一生效
    pub show_passwords: bool,
}

impl BoardState {
    /// 是否存在任何记录
    ///
    /// 由列表长度派生而非单独存储，标志不可能与列表不一致。
    pub fn has_entries(&self) -> bool {
        !self.records.is_empty()
    }

    /// 域名输入框每次变更时原样写入缓冲
    pub fn set_domain_input(mut self, value: String) -> Self {
        self.domain_input = value;
        self
    }

    /// 用户名输入框每次变更时原样写入缓冲
    pub fn set_username_input(mut self, value: String) -> Self {
        self.username_input = value;
        self
    }

    /// 密码输入框每次变更时原样写入缓冲
    pub fn set_password_input(mut self, value: String) -> Self {
        self.password_input = value;
        self
    }

    /// 搜索框每次变更时原样写入缓冲
    pub fn set_search_input(mut self, value: String) -> Self {
        self.search_input = value;
        self
    }

    /// 设置密码可见性开关
    pub fn set_show_passwords(mut self, visible: bool) -> Self {
        self.show_passwords = visible;
        self
    }

    /// 用持久化数据整体替换记录列表（仅在挂载时调用一次）
    pub fn load(mut self, records: Vec<CredentialRecord>) -> Self {
        self.records = records;
        self
    }

    /// 由当前输入缓冲追加一条新记录
    ///
    /// 任何输入（包括全空）都会成功；新记录获得全新 id、缓存的
    /// 首字母与随机颜色。随后三个输入缓冲与搜索缓冲一并清空。
    pub fn add(mut self) -> Self {
        let record = CredentialRecord::new(
            std::mem::take(&mut self.domain_input),
            std::mem::take(&mut self.username_input),
            std::mem::take(&mut self.password_input),
        );
        self.records.push(record);
        self.search_input.clear();
        self
    }

    /// 删除指定 id 的记录
    ///
    /// 其余记录保持原有相对顺序；id 不存在时静默跳过。
    pub fn delete(mut self, id: &str) -> Self {
        self.records.retain(|r| r.id != id);
        self.domain_input.clear();
        self.username_input.clear();
        self.password_input.clear();
        self.search_input.clear();
        self
    }

    /// 按搜索关键字过滤后的显示列表
    ///
    /// 纯投影：域名包含关键字即命中（双方均转小写后做子串匹配），
    /// 空关键字返回全部记录，顺序不变。
    pub fn filtered(&self) -> Vec<CredentialRecord> {
        let needle = self.search_input.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.domain.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_entry(state: BoardState, domain: &str, username: &str, password: &str) -> BoardState {
        state
            .set_domain_input(domain.into())
            .set_username_input(username.into())
            .set_password_input(password.into())
            .add()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut state = BoardState::default();
        for domain in ["a.com", "b.com", "c.com"] {
            state = add_entry(state, domain, "u", "p");
        }

        assert_eq!(state.records.len(), 3);
        let domains: Vec<&str> = state.records.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains, ["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn add_clears_all_text_buffers() {
        let state = BoardState::default()
            .set_search_input("old".into())
            .set_domain_input("example.com".into())
            .set_username_input("alice".into())
            .set_password_input("p1".into())
            .add();

        assert_eq!(state.domain_input, "");
        assert_eq!(state.username_input, "");
        assert_eq!(state.password_input, "");
        assert_eq!(state.search_input, "");
    }

    #[test]
    fn ids_are_unique_across_adds() {
        let mut state = BoardState::default();
        for _ in 0..100 {
            state = add_entry(state, "same.com", "same", "same");
        }

        let mut ids: Vec<String> = state.records.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut state = BoardState::default();
        for domain in ["a.com", "b.com", "c.com", "d.com"] {
            state = add_entry(state, domain, "u", "p");
        }

        let victim = state.records[1].id.clone();
        state = state.delete(&victim);

        let domains: Vec<&str> = state.records.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains, ["a.com", "c.com", "d.com"]);
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let state = add_entry(BoardState::default(), "a.com", "u", "p");
        let before = state.records.clone();

        let state = state.delete("no-such-id");
        assert_eq!(state.records, before);
    }

    #[test]
    fn add_then_delete_round_trips_the_list() {
        let mut state = BoardState::default();
        for domain in ["a.com", "b.com"] {
            state = add_entry(state, domain, "u", "p");
        }
        let before = state.records.clone();

        let state = add_entry(state, "temp.com", "t", "t");
        let fresh_id = state.records.last().map(|r| r.id.clone()).unwrap();
        let state = state.delete(&fresh_id);

        assert_eq!(state.records, before);
    }

    #[test]
    fn filter_is_pure_and_idempotent() {
        let mut state = BoardState::default();
        for domain in ["github.com", "gitlab.com", "crates.io"] {
            state = add_entry(state, domain, "u", "p");
        }
        let state = state.set_search_input("git".into());

        let once = state.filtered();
        let twice = state.filtered();
        assert_eq!(once, twice);
        assert_eq!(state.records.len(), 3); // 存储列表不受过滤影响
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let mut state = BoardState::default();
        for domain in ["b.com", "a.com"] {
            state = add_entry(state, domain, "u", "p");
        }

        assert_eq!(state.filtered(), state.records);
    }

    #[test]
    fn filter_matches_case_insensitively() {
        let state = add_entry(BoardState::default(), "GitHub.com", "u", "p");

        for query in ["git", "GIT", "Hub"] {
            let shown = state.clone().set_search_input(query.into()).filtered();
            assert_eq!(shown.len(), 1, "query {query:?} should match");
        }

        let shown = state.set_search_input("lab".into()).filtered();
        assert!(shown.is_empty());
    }

    #[test]
    fn visibility_toggle_never_touches_records() {
        let state = add_entry(BoardState::default(), "a.com", "alice", "p1");
        let before = state.records.clone();

        let state = state.set_show_passwords(true).set_show_passwords(false);
        assert_eq!(state.records, before);
    }

    #[test]
    fn load_replaces_the_list_wholesale() {
        let stored = add_entry(add_entry(BoardState::default(), "a.com", "u", "p"), "b.com", "u", "p")
            .records;

        let state = add_entry(BoardState::default(), "stale.com", "u", "p").load(stored.clone());
        assert_eq!(state.records, stored);
        assert!(state.has_entries());
    }

    #[test]
    fn walkthrough_add_add_delete_delete() {
        // 完整走一遍：alice 入列、空域名的 bob 入列、再逐条删空
        let state = add_entry(BoardState::default(), "example.com", "alice", "p1");
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].initial, "E");
        assert!(state.has_entries());

        let state = add_entry(state, "", "bob", "p2");
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records[1].initial, "");

        let first_id = state.records[0].id.clone();
        let state = state.delete(&first_id);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].username, "bob");
        assert!(state.has_entries());

        let second_id = state.records[0].id.clone();
        let state = state.delete(&second_id);
        assert!(state.records.is_empty());
        assert!(!state.has_entries());
    }
}
