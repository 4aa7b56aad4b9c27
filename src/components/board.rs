use crate::components::icons::*;
use crate::state::BoardState;
use crate::storage;

use leptos::logging;
use leptos::prelude::*;

/// 掩码占位符，密码不可见时统一渲染
const MASK_GLYPH: &str = "••••••••";

#[component]
pub fn CredentialBoard() -> impl IntoView {
    // 挂载时一次性读入持久化数据，之后所有变更都经由转移函数
    let board = RwSignal::new(BoardState::default().load(storage::load_records()));
    let (notification, set_notification) = signal(Option::<String>::None);

    // 记录列表的派生视图；Memo 去重，输入缓冲的变化不会触发写盘
    let records = Memo::new(move |_| board.with(|s| s.records.clone()));

    // 列表变更时整表写回 LocalStorage（跳过挂载后的首次运行，
    // 避免在用户尚未操作时就覆盖存储）
    Effect::new(move |prev: Option<()>| {
        let list = records.get();
        if prev.is_some() {
            if let Err(err) = storage::save_records(&list) {
                logging::warn!("写入 LocalStorage 失败: {err}");
                set_notification.set(Some("保存失败：浏览器存储不可用或已满".to_string()));
            }
        }
    });

    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let filtered = move || board.with(|s| s.filtered());
    let filtered_count = move || filtered().len();
    let has_entries = move || board.with(|s| s.has_entries());
    let show_passwords = move || board.with(|s| s.show_passwords);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        board.update(|s| *s = std::mem::take(s).add());
    };

    let handle_delete = move |id: String| {
        board.update(|s| *s = std::mem::take(s).delete(&id));
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-3xl mx-auto space-y-6">
                // 通知提示框
                <Show when=move || notification.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class="alert alert-warning shadow-lg">
                            <span>{move || notification.get().unwrap_or_default()}</span>
                        </div>
                    </div>
                </Show>

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2 px-2">
                        <div class="p-2 bg-primary/10 rounded-xl text-primary">
                            <ShieldCheck attr:class="h-6 w-6" />
                        </div>
                        <span class="text-xl font-bold">"密码看板"</span>
                    </div>
                </div>

                // 新增凭据表单
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">"添加新密码"</h2>

                        <div class="form-control">
                            <label class="label" for="domain">
                                <span class="label-text">"网站域名"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <Globe attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="domain"
                                    type="text"
                                    class="grow"
                                    placeholder="example.com"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        board.update(|s| *s = std::mem::take(s).set_domain_input(value));
                                    }
                                    prop:value=move || board.with(|s| s.domain_input.clone())
                                />
                            </label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <User attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="username"
                                    type="text"
                                    class="grow"
                                    placeholder="输入用户名"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        board.update(|s| *s = std::mem::take(s).set_username_input(value));
                                    }
                                    prop:value=move || board.with(|s| s.username_input.clone())
                                />
                            </label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <Lock attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="password"
                                    type="password"
                                    class="grow"
                                    placeholder="输入密码"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        board.update(|s| *s = std::mem::take(s).set_password_input(value));
                                    }
                                    prop:value=move || board.with(|s| s.password_input.clone())
                                />
                            </label>
                        </div>

                        <div class="form-control mt-4">
                            <button type="submit" class="btn btn-primary gap-2">
                                <Plus attr:class="h-4 w-4" /> "添加"
                            </button>
                        </div>
                    </form>
                </div>

                // 凭据列表
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex items-center justify-between gap-4 flex-wrap">
                            <div class="flex items-center gap-2">
                                <h2 class="card-title">"已保存的密码"</h2>
                                <div class="badge badge-primary">{filtered_count}</div>
                            </div>
                            <label class="input input-bordered input-sm flex items-center gap-2">
                                <Search attr:class="h-4 w-4 opacity-50" />
                                <input
                                    type="search"
                                    class="grow"
                                    placeholder="搜索域名"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        board.update(|s| *s = std::mem::take(s).set_search_input(value));
                                    }
                                    prop:value=move || board.with(|s| s.search_input.clone())
                                />
                            </label>
                        </div>

                        <div class="divider my-1"></div>

                        <label class="label cursor-pointer justify-start gap-3 w-fit">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary checkbox-sm"
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    board.update(|s| *s = std::mem::take(s).set_show_passwords(checked));
                                }
                                prop:checked=show_passwords
                            />
                            <span class="label-text">"显示密码"</span>
                        </label>

                        <Show when=move || !has_entries()>
                            <div class="text-center py-12 text-base-content/50">
                                <Lock attr:class="h-10 w-10 mx-auto mb-2 opacity-40" />
                                <p>"暂无密码"</p>
                            </div>
                        </Show>

                        <Show when=has_entries>
                            <ul class="space-y-2">
                                <For
                                    each=filtered
                                    key=|record| record.id.clone()
                                    children=move |record| {
                                        let id = record.id.clone();
                                        let password = record.password.clone();
                                        view! {
                                            <li class="flex items-center gap-4 p-3 rounded-box bg-base-200/50">
                                                <div class=format!(
                                                    "w-10 h-10 rounded-full flex items-center justify-center font-bold shrink-0 {}",
                                                    record.color_tag.avatar_class(),
                                                )>
                                                    {record.initial.clone()}
                                                </div>
                                                <div class="flex-1 min-w-0">
                                                    <p class="font-semibold truncate">{record.domain.clone()}</p>
                                                    <p class="text-sm opacity-70 truncate">{record.username.clone()}</p>
                                                    {move || {
                                                        if show_passwords() {
                                                            view! {
                                                                <p class="text-sm font-mono truncate">{password.clone()}</p>
                                                            }
                                                                .into_any()
                                                        } else {
                                                            view! {
                                                                <p class="text-sm font-mono tracking-widest opacity-60">
                                                                    {MASK_GLYPH}
                                                                </p>
                                                            }
                                                                .into_any()
                                                        }
                                                    }}
                                                </div>
                                                <button
                                                    type="button"
                                                    class="btn btn-ghost btn-sm btn-square text-error"
                                                    on:click=move |_| handle_delete(id.clone())
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
