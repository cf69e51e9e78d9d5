//! In-memory sample directory. Stands in for a data-fetch layer.

use crate::components::network_graph::{
	Connection, ConnectionKind, Education, Hcp, NetworkData, Publication, WorkExperience,
};

pub fn mock_network() -> NetworkData {
	NetworkData { hcps: mock_hcps(), connections: mock_connections() }
}

fn base(id: &str, name: &str, specialty: &str, years: u32, description: &str, about: &str) -> Hcp {
	Hcp {
		id: id.into(),
		name: name.into(),
		specialty: specialty.into(),
		years_experience: years,
		description: description.into(),
		avatar: None,
		peers_count: 0,
		following_count: 0,
		patients_served: 0,
		patients_growth: 0.0,
		success_rate: 0.0,
		success_rate_growth: 0.0,
		about: about.into(),
		education: Vec::new(),
		publications: Vec::new(),
		work_experience: Vec::new(),
	}
}

fn education(institution: &str, degree: &str, specialization: &str, period: &str) -> Education {
	Education {
		institution: institution.into(),
		degree: degree.into(),
		specialization: specialization.into(),
		period: period.into(),
	}
}

fn publication(title: &str, journal: &str, year: u32, co_authors: &[&str]) -> Publication {
	Publication {
		title: title.into(),
		journal: journal.into(),
		year,
		co_authors: co_authors.iter().map(|s| (*s).into()).collect(),
	}
}

fn work(institution: &str, position: &str, period: &str, description: &str) -> WorkExperience {
	WorkExperience {
		institution: institution.into(),
		position: position.into(),
		period: period.into(),
		description: description.into(),
	}
}

fn mock_hcps() -> Vec<Hcp> {
	vec![
		Hcp {
			peers_count: 212,
			following_count: 124,
			patients_served: 1420,
			patients_growth: 4.2,
			success_rate: 94.0,
			success_rate_growth: 1.1,
			education: vec![
				education(
					"Johns Hopkins University",
					"MD",
					"Cardiovascular Medicine",
					"2002-2006",
				),
				education("Stanford University", "BSc", "Human Biology", "1998-2002"),
			],
			publications: vec![
				publication(
					"Outcomes of early intervention in aortic stenosis",
					"Journal of the American College of Cardiology",
					2021,
					&["Dr. Marcus Webb"],
				),
				publication(
					"Wearable telemetry in post-operative cardiac care",
					"Circulation",
					2019,
					&[],
				),
			],
			work_experience: vec![work(
				"Bayview Heart Institute",
				"Director of Interventional Cardiology",
				"2014-present",
				"Leads the structural heart program and the catheterization lab.",
			)],
			..base(
				"hcp-1",
				"Dr. Sarah Chen",
				"Cardiology",
				18,
				"Interventional cardiologist focused on structural heart disease.",
				"Sarah leads a structural heart program and splits her time between the cath lab, outcomes research, and mentoring fellows.",
			)
		},
		Hcp {
			peers_count: 178,
			following_count: 96,
			patients_served: 980,
			patients_growth: 2.8,
			success_rate: 91.0,
			success_rate_growth: 0.6,
			education: vec![education(
				"Mayo Clinic Alix School of Medicine",
				"MD",
				"Neurology",
				"2005-2009",
			)],
			publications: vec![publication(
				"Heart-brain axis signalling after ischaemic events",
				"The Lancet Neurology",
				2021,
				&["Dr. Sarah Chen"],
			)],
			work_experience: vec![work(
				"Lakeside Neuroscience Center",
				"Attending Neurologist",
				"2012-present",
				"Runs the stroke recovery clinic.",
			)],
			..base(
				"hcp-2",
				"Dr. Marcus Webb",
				"Neurology",
				15,
				"Stroke specialist with a research line in the heart-brain axis.",
				"Marcus combines clinical stroke work with longitudinal research on cardiovascular contributions to cognitive decline.",
			)
		},
		Hcp {
			peers_count: 141,
			following_count: 88,
			patients_served: 760,
			patients_growth: 3.5,
			success_rate: 88.0,
			success_rate_growth: 0.9,
			education: vec![education(
				"University of Pennsylvania",
				"MD, PhD",
				"Oncology",
				"2004-2012",
			)],
			publications: vec![publication(
				"Immunotherapy response markers in solid tumours",
				"Nature Medicine",
				2022,
				&[],
			)],
			work_experience: vec![work(
				"Harborview Cancer Center",
				"Medical Oncologist",
				"2013-present",
				"Phase II/III trial lead for thoracic oncology.",
			)],
			..base(
				"hcp-3",
				"Dr. Amara Okafor",
				"Oncology",
				13,
				"Medical oncologist and translational researcher.",
				"Amara's clinic anchors several immunotherapy trials; she is a frequent referral target for complex thoracic cases.",
			)
		},
		Hcp {
			peers_count: 167,
			following_count: 131,
			patients_served: 1310,
			patients_growth: 5.1,
			success_rate: 96.0,
			success_rate_growth: 0.4,
			education: vec![education(
				"Baylor College of Medicine",
				"MD",
				"Pediatrics",
				"2001-2005",
			)],
			work_experience: vec![work(
				"Riverbend Children's Hospital",
				"Chief of General Pediatrics",
				"2016-present",
				"Oversees outpatient pediatrics across three sites.",
			)],
			..base(
				"hcp-4",
				"Dr. Elena Vasquez",
				"Pediatrics",
				19,
				"General pediatrician and department chief.",
				"Elena runs one of the region's busiest outpatient pediatric practices and coordinates its residency rotations.",
			)
		},
		Hcp {
			peers_count: 93,
			following_count: 74,
			patients_served: 540,
			patients_growth: 1.9,
			success_rate: 85.0,
			success_rate_growth: 1.4,
			education: vec![education(
				"Columbia University",
				"MD",
				"Psychiatry",
				"2008-2012",
			)],
			..base(
				"hcp-5",
				"Dr. David Kim",
				"Psychiatry",
				11,
				"Adult psychiatrist focused on mood disorders.",
				"David splits his week between an outpatient mood-disorder clinic and consult-liaison work for medical inpatients.",
			)
		},
		Hcp {
			peers_count: 128,
			following_count: 67,
			patients_served: 1180,
			patients_growth: 6.3,
			success_rate: 89.0,
			success_rate_growth: 0.8,
			education: vec![education(
				"University of Michigan",
				"MD",
				"Emergency Medicine",
				"2006-2010",
			)],
			work_experience: vec![work(
				"Metro General Hospital",
				"Emergency Department Attending",
				"2011-present",
				"Night-shift lead, trauma intake.",
			)],
			..base(
				"hcp-6",
				"Dr. Rachel Torres",
				"Emergency Medicine",
				14,
				"ED attending and trauma intake lead.",
				"Rachel coordinates emergency cardiac and stroke pathways with the region's specialty centers.",
			)
		},
		Hcp {
			peers_count: 85,
			following_count: 59,
			patients_served: 620,
			patients_growth: 2.2,
			success_rate: 93.0,
			success_rate_growth: 0.3,
			education: vec![education(
				"Duke University",
				"MD",
				"Dermatology",
				"2010-2014",
			)],
			..base(
				"hcp-7",
				"Dr. James Patel",
				"Dermatology",
				9,
				"Dermatologist with a focus on cutaneous oncology.",
				"James screens high-risk patients and co-manages melanoma follow-up with medical oncology.",
			)
		},
		Hcp {
			peers_count: 119,
			following_count: 82,
			patients_served: 870,
			patients_growth: 3.0,
			success_rate: 92.0,
			success_rate_growth: 0.7,
			education: vec![education(
				"Northwestern University",
				"MD",
				"Orthopedic Surgery",
				"2003-2007",
			)],
			work_experience: vec![work(
				"Summit Orthopedic Group",
				"Orthopedic Surgeon",
				"2012-present",
				"Sports medicine and joint reconstruction.",
			)],
			..base(
				"hcp-8",
				"Dr. Lisa Thompson",
				"Orthopedics",
				16,
				"Orthopedic surgeon, sports medicine.",
				"Lisa's practice covers joint reconstruction with a rehabilitation pathway she co-designed with physical therapy.",
			)
		},
		Hcp {
			peers_count: 77,
			following_count: 45,
			patients_served: 1490,
			patients_growth: 2.5,
			success_rate: 97.0,
			success_rate_growth: 0.2,
			education: vec![education(
				"Washington University in St. Louis",
				"MD",
				"Diagnostic Radiology",
				"2005-2009",
			)],
			..base(
				"hcp-9",
				"Dr. Omar Haddad",
				"Radiology",
				14,
				"Diagnostic radiologist, cardiothoracic imaging.",
				"Omar reads cardiothoracic studies for three hospitals and teaches imaging interpretation to residents.",
			)
		},
		Hcp {
			peers_count: 102,
			following_count: 71,
			patients_served: 1050,
			patients_growth: 1.6,
			success_rate: 95.0,
			success_rate_growth: 0.5,
			education: vec![education(
				"University of California, San Francisco",
				"MD",
				"Anesthesiology",
				"2007-2011",
			)],
			..base(
				"hcp-10",
				"Dr. Grace Liu",
				"Anesthesiology",
				12,
				"Cardiac anesthesiologist.",
				"Grace staffs the cardiac operating rooms and chairs the perioperative safety committee.",
			)
		},
		Hcp {
			peers_count: 134,
			following_count: 90,
			patients_served: 930,
			patients_growth: 4.7,
			success_rate: 90.0,
			success_rate_growth: 1.0,
			education: vec![education(
				"Emory University",
				"MD",
				"Obstetrics & Gynecology",
				"2004-2008",
			)],
			work_experience: vec![work(
				"Magnolia Women's Health",
				"OB/GYN Attending",
				"2010-present",
				"High-risk obstetrics service.",
			)],
			..base(
				"hcp-11",
				"Dr. Nicole Adams",
				"Obstetrics & Gynecology",
				17,
				"OB/GYN with a high-risk obstetrics service.",
				"Nicole runs a maternal-fetal clinic and coordinates closely with anesthesiology on delivery planning.",
			)
		},
		Hcp {
			peers_count: 88,
			following_count: 53,
			patients_served: 680,
			patients_growth: 2.0,
			success_rate: 87.0,
			success_rate_growth: 0.6,
			education: vec![education(
				"University of Chicago",
				"MD",
				"Gastroenterology",
				"2009-2013",
			)],
			..base(
				"hcp-12",
				"Dr. Ben Novak",
				"Gastroenterology",
				10,
				"Gastroenterologist, inflammatory bowel disease.",
				"Ben's IBD clinic anchors a shared-care pathway with colorectal surgery and nutrition services.",
			)
		},
	]
}

fn connection(
	id: &str,
	from: &str,
	to: &str,
	kind: ConnectionKind,
	strength: i32,
	description: &str,
	details: Option<&str>,
) -> Connection {
	Connection {
		id: id.into(),
		from: from.into(),
		to: to.into(),
		kind,
		description: description.into(),
		details: details.map(Into::into),
		strength,
	}
}

fn mock_connections() -> Vec<Connection> {
	vec![
		connection(
			"conn-1",
			"hcp-1",
			"hcp-2",
			ConnectionKind::CoAuthored,
			5,
			"Joint publications on the heart-brain axis.",
			Some("Three papers since 2019, two ongoing cohort studies."),
		),
		connection(
			"conn-2",
			"hcp-1",
			"hcp-9",
			ConnectionKind::Colleague,
			4,
			"Weekly cardiothoracic imaging conference.",
			None,
		),
		connection(
			"conn-3",
			"hcp-1",
			"hcp-10",
			ConnectionKind::Colleague,
			5,
			"Shared cardiac OR service.",
			Some("Operate together on most structural cases."),
		),
		connection(
			"conn-4",
			"hcp-1",
			"hcp-6",
			ConnectionKind::Referral,
			4,
			"Emergency chest-pain pathway referrals.",
			Some("Average 4-6 urgent referrals per month."),
		),
		connection(
			"conn-5",
			"hcp-2",
			"hcp-6",
			ConnectionKind::Referral,
			3,
			"Acute stroke activations from the ED.",
			None,
		),
		connection(
			"conn-6",
			"hcp-3",
			"hcp-7",
			ConnectionKind::Referral,
			4,
			"Melanoma co-management referrals.",
			None,
		),
		connection(
			"conn-7",
			"hcp-3",
			"hcp-9",
			ConnectionKind::ResearchCollaboration,
			3,
			"Imaging endpoints for immunotherapy trials.",
			Some("Radiomics substudy of two phase II trials."),
		),
		connection(
			"conn-8",
			"hcp-1",
			"hcp-3",
			ConnectionKind::ResearchCollaboration,
			2,
			"Cardio-oncology toxicity registry.",
			None,
		),
		connection(
			"conn-9",
			"hcp-4",
			"hcp-5",
			ConnectionKind::Colleague,
			3,
			"Adolescent mental health clinic liaison.",
			None,
		),
		connection(
			"conn-10",
			"hcp-2",
			"hcp-5",
			ConnectionKind::MentorMentee,
			4,
			"Residency mentorship, continued case review.",
			Some("Marcus supervised David's neuropsychiatry rotation."),
		),
		connection(
			"conn-11",
			"hcp-1",
			"hcp-12",
			ConnectionKind::MentorMentee,
			3,
			"Early-career faculty mentorship.",
			None,
		),
		connection(
			"conn-12",
			"hcp-8",
			"hcp-6",
			ConnectionKind::Referral,
			5,
			"Orthopedic trauma hand-offs.",
			Some("Direct line from trauma intake to the fracture clinic."),
		),
		connection(
			"conn-13",
			"hcp-10",
			"hcp-11",
			ConnectionKind::Colleague,
			4,
			"Obstetric anesthesia planning.",
			None,
		),
		connection(
			"conn-14",
			"hcp-12",
			"hcp-3",
			ConnectionKind::Referral,
			2,
			"GI malignancy work-ups.",
			None,
		),
		connection(
			"conn-15",
			"hcp-4",
			"hcp-11",
			ConnectionKind::Colleague,
			2,
			"Newborn hand-off rounds.",
			None,
		),
		connection(
			"conn-16",
			"hcp-7",
			"hcp-9",
			ConnectionKind::CoAuthored,
			1,
			"Case report on imaging of cutaneous metastases.",
			None,
		),
	]
}
