//! Detail dialog for a clicked connection.

use leptos::prelude::*;

use crate::components::connection_tooltip::strength_style;
use crate::components::network_graph::{Connection, Hcp};

#[component]
fn EndpointCard(hcp: Hcp) -> impl IntoView {
	view! {
		<div style="flex: 1; padding: 16px; border: 1px solid #e2e8f0; border-radius: 10px;">
			<h4 style="margin: 0; font-size: 14px; color: #111827;">{hcp.name.clone()}</h4>
			<p style="margin: 0 0 8px; font-size: 13px; color: #2563eb;">
				{hcp.specialty.clone()}
			</p>
			<p style="margin: 0; font-size: 13px; color: #374151;">
				{format!("{} years experience", hcp.years_experience)}
			</p>
			<p style="margin: 0; font-size: 13px; color: #374151;">
				{format!("{} peers", hcp.peers_count)}
			</p>
		</div>
	}
}

/// Renders nothing while no connection is selected.
#[component]
pub fn ConnectionModal(
	#[prop(into)] detail: Signal<Option<(Connection, Hcp, Hcp)>>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	move || {
		detail.get().map(|(connection, from, to)| {
			view! {
				<div
					class="modal-backdrop"
					style="position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; background: rgba(15, 23, 42, 0.4);"
					on:click=move |_| on_close.run(())
				>
					<div
						class="modal"
						style="width: min(640px, 90vw); max-height: 85vh; overflow-y: auto; padding: 24px; background: white; border-radius: 12px;"
						on:click=|ev| ev.stop_propagation()
					>
						<div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
							<h2 style="margin: 0; font-size: 17px; color: #111827;">
								{format!("Connection Details: {}", connection.kind.label())}
							</h2>
							<button
								style="border: none; background: none; font-size: 18px; cursor: pointer; color: #6b7280;"
								on:click=move |_| on_close.run(())
							>
								"×"
							</button>
						</div>

						<div style="padding: 16px; margin-bottom: 16px; border: 1px solid #e2e8f0; border-radius: 10px;">
							<div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;">
								<h3 style="margin: 0; font-size: 14px; color: #111827;">
									"Connection Overview"
								</h3>
								<span
									style=format!(
										"font-size: 12px; padding: 2px 8px; border-radius: 999px; {}",
										strength_style(connection.strength),
									)
								>
									{format!("Strength: {}/5", connection.strength)}
								</span>
							</div>
							<p style="margin: 0 0 8px; font-size: 13px; color: #4b5563;">
								{connection.description.clone()}
							</p>
							{connection
								.details
								.clone()
								.map(|details| {
									view! {
										<p style="margin: 0; padding: 10px; font-size: 13px; color: #374151; background: #f9fafb; border-radius: 8px;">
											{details}
										</p>
									}
								})}
						</div>

						<div style="display: flex; gap: 16px;">
							<EndpointCard hcp=from.clone() />
							<EndpointCard hcp=to.clone() />
						</div>
					</div>
				</div>
			}
		})
	}
}
