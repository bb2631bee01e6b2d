//! Built-in fallback resumes.
//!
//! Served whenever no API key is configured or generation fails, so the
//! endpoint always has something to return. The documents use the same wire
//! shape the generator produces.

use rand::Rng;
use serde_json::{json, Value};

/// Picks one sample resume at random.
pub fn random_sample() -> Value {
    let mut samples = sample_resumes();
    let idx = rand::thread_rng().gen_range(0..samples.len());
    samples.swap_remove(idx)
}

fn sample_resumes() -> Vec<Value> {
    vec![
        json!({
            "name": "Dr. Marigold Thistlewood",
            "title": "Chief Daydream Architect",
            "summary": "Visionary cloud-gazing strategist with 14 years of experience designing \
                load-bearing daydreams for distracted professionals. Pioneer of the four-phase \
                reverie framework and a frequent keynote napper at industry retreats.",
            "contact": {
                "email": "marigold.thistlewood@reveriestudio.example",
                "phone": "(555) 014-REVE",
                "location": "Drowsy Hollow, VT"
            },
            "experience": [
                {
                    "company": "Reverie Studio",
                    "role": "Principal Daydream Architect",
                    "duration": "2019 - Present",
                    "description": "Scaled the studio's idle-thought pipeline to 40,000 daydreams per quarter while cutting accidental nightmares by 92%."
                },
                {
                    "company": "Woolgather & Sons",
                    "role": "Senior Reverie Engineer",
                    "duration": "2014 - 2019",
                    "description": "Designed the industry's first ergonomic window-staring stations, adopted by 300 open-plan offices."
                },
                {
                    "company": "Cloudshape Consulting",
                    "role": "Junior Cumulus Interpreter",
                    "duration": "2011 - 2014",
                    "description": "Catalogued 1,200 cloud formations and their most plausible animal resemblances for client inspiration decks."
                }
            ],
            "skills": [
                "Advanced Woolgathering",
                "Window-Gaze Optimization",
                "Cumulus Pattern Recognition",
                "Strategic Procrastination Planning",
                "Lucid Meeting Attendance"
            ]
        }),
        json!({
            "name": "Barnaby Quill",
            "title": "Senior Lighthouse Whisperer",
            "summary": "Coastal infrastructure empath with two decades of experience keeping \
                temperamental lighthouses emotionally stable and optically brilliant. Certified \
                in fog negotiation and fluent in three regional gull dialects.",
            "contact": {
                "email": "barnaby.quill@beaconcare.example",
                "phone": "(555) 032-LAMP",
                "location": "Gullwing Point, ME"
            },
            "experience": [
                {
                    "company": "Beacon Care Cooperative",
                    "role": "Senior Lighthouse Whisperer",
                    "duration": "2016 - Present",
                    "description": "Talked four historic lighthouses out of early retirement, preserving 37 nautical miles of nighttime visibility."
                },
                {
                    "company": "Foghorn Diplomatic Services",
                    "role": "Fog Negotiation Specialist",
                    "duration": "2009 - 2016",
                    "description": "Brokered seasonal agreements between fog banks and ferry schedules, reducing missed crossings by 61%."
                }
            ],
            "skills": [
                "Empathetic Lamp Maintenance",
                "Gull Dialect Interpretation",
                "Fog Bank Diplomacy",
                "Spiral Staircase Endurance",
                "Maritime Small Talk"
            ]
        }),
        json!({
            "name": "Juniper Vex",
            "title": "Principal Gravity Consultant",
            "summary": "Seasoned downward-motion advisor helping enterprises fall more \
                gracefully. Author of 'Settling Down: A Practical Guide to Controlled Descent' \
                and holder of 9 patents in recreational plummeting safety.",
            "contact": {
                "email": "juniper.vex@terrafirm.example",
                "phone": "(555) 098-DROP",
                "location": "Valley Bottom, CO"
            },
            "experience": [
                {
                    "company": "TerraFirm Advisory",
                    "role": "Principal Gravity Consultant",
                    "duration": "2020 - Present",
                    "description": "Audited the descent strategies of 85 client organizations, eliminating unplanned uplift across every engagement."
                },
                {
                    "company": "Plummet Labs",
                    "role": "Lead Descent Analyst",
                    "duration": "2015 - 2020",
                    "description": "Built the reference benchmark suite for comparing apple drops across orchard conditions, cited in 14 papers."
                },
                {
                    "company": "Newton & Daughters",
                    "role": "Apprentice Fall Observer",
                    "duration": "2012 - 2015",
                    "description": "Logged 10,000 supervised object drops with a 100% ground-contact success rate."
                }
            ],
            "skills": [
                "Controlled Descent Planning",
                "Terminal Velocity Forecasting",
                "Orchard Risk Assessment",
                "Downhill Stakeholder Alignment",
                "Professional Landing Critique"
            ]
        }),
    ]
}
