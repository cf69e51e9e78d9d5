//! Hover card for a professional.

use leptos::prelude::*;

use crate::components::network_graph::Hcp;

#[component]
pub fn NodeTooltip(hcp: Hcp) -> impl IntoView {
	let education: Vec<_> = hcp.education.iter().take(2).cloned().collect();
	let work: Vec<_> = hcp.work_experience.iter().take(2).cloned().collect();
	let publication_count = hcp.publications.len();

	view! {
		<div
			class="node-tooltip"
			style="max-width: 320px; padding: 16px; background: white; border: 1px solid #e2e8f0; border-radius: 10px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.12);"
		>
			<div style="margin-bottom: 10px;">
				<h3 style="margin: 0; font-size: 15px; color: #111827;">{hcp.name.clone()}</h3>
				<p style="margin: 0; font-size: 13px; color: #2563eb;">{hcp.specialty.clone()}</p>
				<span style="font-size: 12px; color: #6b7280;">
					{format!("{} years experience", hcp.years_experience)}
				</span>
			</div>

			<div style="display: flex; gap: 16px; margin-bottom: 10px; font-size: 13px;">
				<span>{format!("{} patients", hcp.patients_served)}</span>
				<span>{format!("{}% success rate", hcp.success_rate)}</span>
			</div>

			{(!education.is_empty())
				.then(|| {
					view! {
						<div style="margin-bottom: 8px;">
							<h4 style="margin: 0 0 4px; font-size: 13px; color: #111827;">
								"Education"
							</h4>
							{education
								.into_iter()
								.map(|edu| {
									view! {
										<div style="margin-bottom: 4px;">
											<p style="margin: 0; font-size: 13px; color: #111827;">
												{edu.institution}
											</p>
											<p style="margin: 0; font-size: 12px; color: #4b5563;">
												{edu.degree}
											</p>
											<p style="margin: 0; font-size: 12px; color: #6b7280;">
												{edu.specialization}
											</p>
										</div>
									}
								})
								.collect_view()}
						</div>
					}
				})}

			{(!work.is_empty())
				.then(|| {
					view! {
						<div style="margin-bottom: 8px;">
							<h4 style="margin: 0 0 4px; font-size: 13px; color: #111827;">
								"Experience"
							</h4>
							{work
								.into_iter()
								.map(|entry| {
									view! {
										<div style="margin-bottom: 4px;">
											<p style="margin: 0; font-size: 13px; color: #111827;">
												{entry.position}
											</p>
											<p style="margin: 0; font-size: 12px; color: #4b5563;">
												{entry.institution}
											</p>
											<p style="margin: 0; font-size: 12px; color: #6b7280;">
												{entry.period}
											</p>
										</div>
									}
								})
								.collect_view()}
						</div>
					}
				})}

			{(publication_count > 0)
				.then(|| {
					view! {
						<p style="margin: 0; font-size: 12px; color: #6b7280;">
							{format!("{publication_count} publications")}
						</p>
					}
				})}
		</div>
	}
}
