//! Fixed reading material shown next to the journal.

pub const BANNER: &str = "⋆ ˚｡⋆୨ The Capy Corner ୧⋆ ˚｡⋆\nCapy Mood Tracker and Journal";

pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Page {
    pub header: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
}

pub const RESOURCES: Page = Page {
    header: "Mental Health Resources for Adolescents",
    intro: "Here are some helpful resources for mental health support:",
    sections: &[
        Section {
            title: "National Suicide Prevention Lifeline",
            body: "Call 1-800-273-TALK (1-800-273-8255) for 24/7 confidential support.",
        },
        Section {
            title: "Crisis Text Line",
            body: "Text HOME to 741741 to connect with a trained crisis counselor.",
        },
        Section {
            title: "Teen Mental Health Resources",
            body: "Visit Teen Mental Health (https://teenmentalhealth.org) for more information on mental health topics.",
        },
        Section {
            title: "Adolescent Counseling Services",
            body: "Counseling services (https://www.counsellingtorontoteens.com/) designed for adolescents can help guide you through difficult situations.",
        },
    ],
};

pub const HABITS: Page = Page {
    header: "Building Healthy Habits",
    intro: "Here are some tips for building and maintaining healthy habits:",
    sections: &[
        Section {
            title: "Establish a Morning Routine",
            body: "Start each day with a positive and calming routine. This could include activities like journaling, stretching, or enjoying a nutritious breakfast. Establishing a morning routine is crucial for adolescents as it sets the tone for the day ahead. A consistent routine helps create structure, reduces stress, and boosts productivity by allowing teens to start their day with purpose. Incorporating calming activities, like stretching, journaling, or enjoying a healthy breakfast, can enhance mental well-being, improve focus, and foster a sense of control. By making mornings predictable and positive, adolescents can feel more prepared and confident in handling the challenges of their day.",
        },
        Section {
            title: "Set Achievable Goals",
            body: "Set specific, measurable, achievable, relevant, and time-bound (SMART) goals. Track your progress to stay motivated.",
        },
        Section {
            title: "Get Active",
            body: "Exercise regularly to improve your physical and mental health. Find an activity that you enjoy, such as walking, yoga, or dancing. Being active is essential for adolescents as it not only improves physical health but also supports mental well-being. Regular exercise boosts energy levels, enhances mood, and reduces stress, making it easier to manage school and social pressures. Whether it's through sports, dancing, or simple activities like walking or stretching, staying active promotes better sleep, improves focus, and increases overall happiness. Encouraging physical activity helps teens build healthy habits that last a lifetime and contribute to both their physical and emotional resilience.",
        },
        Section {
            title: "Stay Hydrated",
            body: "Drinking enough water helps your body function optimally and improves mood and energy levels.",
        },
        Section {
            title: "Prioritize Sleep",
            body: "Aim for 7-9 hours of sleep per night. A consistent sleep schedule helps boost mental and physical well-being. Prioritizing sleep is vital for adolescents as it supports both physical and mental health. During sleep, the body repairs itself, consolidates memories, and recharges energy levels. Teenagers need 7-9 hours of sleep to improve mood, focus, and academic performance. Consistent sleep patterns can help regulate emotions, reduce stress, and boost cognitive function, leading to better decision-making and problem-solving. By establishing a regular sleep schedule, adolescents can enhance their overall well-being, improve mental clarity, and feel more energized to take on daily challenges.",
        },
    ],
};

impl Page {
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.header, self.intro);

        for section in self.sections {
            out.push_str(&format!("\n{}\n\t{}\n", section.title, section.body));
        }

        out
    }
}
