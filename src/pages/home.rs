use leptos::prelude::*;

use crate::components::network_graph::{Hcp, NetworkGraphCanvas};
use crate::components::profile_sidebar::ProfileSidebar;
use crate::components::search_bar::SearchBar;
use crate::data;

/// Directory page: brand header, search, and the selected profile on the
/// left; the interactive network canvas on the right. Owns the
/// selection/highlight state both sides synchronize through.
#[component]
pub fn Home() -> impl IntoView {
	let network = data::mock_network();
	let selected: RwSignal<Option<Hcp>> = RwSignal::new(network.hcps.first().cloned());
	let highlighted: RwSignal<Option<String>> = RwSignal::new(None);

	let select_hcp = Callback::new(move |hcp: Hcp| {
		highlighted.set(Some(hcp.id.clone()));
		selected.set(Some(hcp));
	});

	let roster = network.hcps.clone();
	let on_node_select = Callback::new(move |id: String| {
		if let Some(hcp) = roster.iter().find(|h| h.id == id) {
			select_hcp.run(hcp.clone());
		}
	});

	let hcps = network.hcps.clone();
	let hcps_signal = Signal::derive(move || hcps.clone());
	let data_signal = Signal::derive(move || network.clone());
	let selected_id = Signal::derive(move || selected.get().map(|h| h.id));

	view! {
		<div style="display: flex; height: 100vh; background: #f9fafb;">
			<aside style="width: 384px; display: flex; flex-direction: column; background: white; border-right: 1px solid #e5e7eb;">
				<div style="padding: 16px; border-bottom: 1px solid #e5e7eb;">
					<div style="display: flex; align-items: center; gap: 12px; margin-bottom: 16px;">
						<div style="display: flex; align-items: center; justify-content: center; width: 32px; height: 32px; background: #2563eb; border-radius: 8px;">
							<span style="color: white; font-weight: 700; font-size: 13px;">
								"PS"
							</span>
						</div>
						<h1 style="margin: 0; font-size: 19px; color: #111827;">"PeerSpace"</h1>
					</div>
					<SearchBar hcps=hcps_signal on_select=select_hcp />
				</div>
				<div style="flex: 1; overflow-y: auto;">
					<ProfileSidebar hcp=selected />
				</div>
			</aside>

			<main style="flex: 1; position: relative;">
				<NetworkGraphCanvas
					data=data_signal
					selected_id=selected_id
					highlighted_id=highlighted
					on_select=on_node_select
				/>
			</main>
		</div>
	}
}
