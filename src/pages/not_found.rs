use leptos::prelude::*;

/// 404 fallback.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; gap: 8px;">
			<h1 style="margin: 0;">"Page not found"</h1>
			<a href="/">"Back to the directory"</a>
		</div>
	}
}
