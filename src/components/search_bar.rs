//! Search over the professional directory.

use leptos::prelude::*;

use crate::components::network_graph::Hcp;

/// Case-insensitive substring match over name and specialty. Input order is
/// preserved; a blank query matches nothing.
pub fn search_hcps(hcps: &[Hcp], query: &str) -> Vec<Hcp> {
	let query = query.trim().to_lowercase();
	if query.is_empty() {
		return Vec::new();
	}
	hcps.iter()
		.filter(|h| {
			h.name.to_lowercase().contains(&query) || h.specialty.to_lowercase().contains(&query)
		})
		.cloned()
		.collect()
}

/// Search input with a results dropdown. Submitting picks the first match.
#[component]
pub fn SearchBar(
	#[prop(into)] hcps: Signal<Vec<Hcp>>,
	#[prop(into)] on_select: Callback<Hcp>,
) -> impl IntoView {
	let query = RwSignal::new(String::new());
	let show_results = RwSignal::new(false);
	let results = Memo::new(move |_| search_hcps(&hcps.get(), &query.get()));

	let pick = move |hcp: Hcp| {
		query.set(hcp.name.clone());
		show_results.set(false);
		on_select.run(hcp);
	};

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		if let Some(first) = results.get().into_iter().next() {
			pick(first);
		}
	};

	view! {
		<div class="search-bar" style="position: relative;">
			<form on:submit=on_submit>
				<input
					type="text"
					placeholder="Search"
					prop:value=move || query.get()
					on:input=move |ev| {
						let value = event_target_value(&ev);
						show_results.set(!value.trim().is_empty());
						query.set(value);
					}
					on:focus=move |_| {
						show_results.set(!query.get_untracked().trim().is_empty())
					}
					style="width: 100%; padding: 8px 12px; border: 1px solid #e2e8f0; border-radius: 8px;"
				/>
			</form>

			{move || {
				(show_results.get() && !results.get().is_empty()).then(|| {
					view! {
						<div
							class="search-results"
							style="position: absolute; top: 100%; left: 0; right: 0; margin-top: 4px; z-index: 50; max-height: 240px; overflow-y: auto; background: white; border: 1px solid #e2e8f0; border-radius: 8px;"
						>
							{results
								.get()
								.into_iter()
								.map(|hcp| {
									let entry = hcp.clone();
									view! {
										<div
											class="search-result"
											style="padding: 12px; cursor: pointer; border-bottom: 1px solid #f1f5f9;"
											on:click=move |_| pick(entry.clone())
										>
											<p style="margin: 0; font-weight: 500; color: #111827;">
												{hcp.name.clone()}
											</p>
											<p style="margin: 0; font-size: 13px; color: #4b5563;">
												{hcp.specialty.clone()}
											</p>
										</div>
									}
								})
								.collect_view()}
						</div>
					}
				})
			}}

			{move || {
				(show_results.get() && results.get().is_empty()
					&& !query.get().trim().is_empty())
					.then(|| {
						view! {
							<div
								class="search-results"
								style="position: absolute; top: 100%; left: 0; right: 0; margin-top: 4px; z-index: 50; padding: 12px; background: white; border: 1px solid #e2e8f0; border-radius: 8px;"
							>
								<p style="margin: 0; font-size: 13px; color: #6b7280;">
									"No healthcare professionals found"
								</p>
							</div>
						}
					})
			}}
		</div>
	}
}
