use crate::model::dimension::Dimension;
use crate::model::question::{AnswerOption, Benchmarks, Question, QuestionKind, SubQuestion};

const SPEED_OPTIONS: &[AnswerOption] = &[
    AnswerOption {
        value: 0.5,
        label: "Less than once per week",
    },
    AnswerOption {
        value: 1.5,
        label: "1-2 times per week",
    },
    AnswerOption {
        value: 3.5,
        label: "3-4 times per week",
    },
    AnswerOption {
        value: 5.5,
        label: "5-6 times per week",
    },
    AnswerOption {
        value: 7.5,
        label: "7-8 times per week",
    },
    AnswerOption {
        value: 9.0,
        label: "9+ times per week",
    },
    AnswerOption {
        value: -1.0,
        label: "I don't know/Not applicable",
    },
];

const QUALITY_OPTIONS: &[AnswerOption] = &[
    AnswerOption {
        value: 5.0,
        label: "0-5%",
    },
    AnswerOption {
        value: 4.0,
        label: "5-10%",
    },
    AnswerOption {
        value: 3.0,
        label: "10-15%",
    },
    AnswerOption {
        value: 2.0,
        label: "16-20%",
    },
    AnswerOption {
        value: 1.0,
        label: "21%+",
    },
    AnswerOption {
        value: -1.0,
        label: "I don't know/Not applicable",
    },
];

const IMPACT_OPTIONS: &[AnswerOption] = &[
    AnswerOption {
        value: 5.0,
        label: "80-100% new features",
    },
    AnswerOption {
        value: 4.0,
        label: "60-80% new features",
    },
    AnswerOption {
        value: 3.0,
        label: "40-60% new features",
    },
    AnswerOption {
        value: 2.0,
        label: "20-40% new features",
    },
    AnswerOption {
        value: 1.0,
        label: "0-20% new features",
    },
    AnswerOption {
        value: -1.0,
        label: "I don't know/Not applicable",
    },
];

const EFFECTIVENESS_OPTIONS: &[AnswerOption] = &[
    AnswerOption {
        value: 5.0,
        label: "Excellent",
    },
    AnswerOption {
        value: 4.0,
        label: "Good",
    },
    AnswerOption {
        value: 3.0,
        label: "Fair",
    },
    AnswerOption {
        value: 2.0,
        label: "Poor",
    },
    AnswerOption {
        value: 1.0,
        label: "Very Poor",
    },
    AnswerOption {
        value: -1.0,
        label: "N/A",
    },
];

const EFFECTIVENESS_SUB_QUESTIONS: &[SubQuestion] = &[
    SubQuestion {
        key: "documentation",
        title: "Documentation quality and accessibility",
        description: "How well documented and accessible is the codebase?",
    },
    SubQuestion {
        key: "focus",
        title: "Deep work and focus time",
        description: "Can you maintain focus without frequent interruptions?",
    },
    SubQuestion {
        key: "buildTest",
        title: "Build and test processes",
        description: "How efficient are the build and testing workflows?",
    },
    SubQuestion {
        key: "confidence",
        title: "Confidence in making changes",
        description: "How confident are you in making codebase changes?",
    },
    SubQuestion {
        key: "incidents",
        title: "Incident response effectiveness",
        description: "How well does the team handle and resolve incidents?",
    },
    SubQuestion {
        key: "localDev",
        title: "Local development experience",
        description: "How smooth is the local development process?",
    },
    SubQuestion {
        key: "planning",
        title: "Planning processes",
        description: "How effective is the team's planning process?",
    },
    SubQuestion {
        key: "dependencies",
        title: "Cross-team dependencies management",
        description: "How well are dependencies between teams managed?",
    },
    SubQuestion {
        key: "releases",
        title: "Ease of release process",
        description: "How smooth is the release deployment process?",
    },
    SubQuestion {
        key: "maintainability",
        title: "Code maintainability",
        description: "How maintainable and clean is the codebase?",
    },
];

// Slice order defines form, table, and CSV column order.
const CORE4_QUESTIONS: &[Question] = &[
    Question {
        key: "prThroughput",
        title: "PR Throughput",
        description: "In the past month, how frequently have you merged new changes (PRs, MRs) that you were the author of?",
        dimension: Dimension::Speed,
        benchmarks: Some(Benchmarks {
            p90: 4.3,
            p75: 4.0,
            p50: 3.5,
        }),
        kind: QuestionKind::Scale {
            options: SPEED_OPTIONS,
        },
    },
    Question {
        key: "changeFailureRate",
        title: "Change Failure Rate",
        description: "For the primary application or service you work on, approximately what percentage of changes to production result in degraded service and require remediation?",
        dimension: Dimension::Quality,
        benchmarks: Some(Benchmarks {
            p90: 3.0,
            p75: 3.4,
            p50: 4.0,
        }),
        kind: QuestionKind::Scale {
            options: QUALITY_OPTIONS,
        },
    },
    Question {
        key: "timeAllocation",
        title: "Time Allocation",
        description: "In the last three months, what percentage of your time was spent on new features vs. maintenance?",
        dimension: Dimension::Impact,
        benchmarks: Some(Benchmarks {
            p90: 66.1,
            p75: 61.6,
            p50: 59.2,
        }),
        kind: QuestionKind::Scale {
            options: IMPACT_OPTIONS,
        },
    },
    Question {
        key: "developerExperience",
        title: "Developer Experience Index (DXI)",
        description: "A measure of the overall developer experience and team effectiveness",
        dimension: Dimension::Effectiveness,
        benchmarks: Some(Benchmarks {
            p90: 78.0,
            p75: 71.0,
            p50: 60.0,
        }),
        kind: QuestionKind::Effectiveness {
            options: EFFECTIVENESS_OPTIONS,
            sub_questions: EFFECTIVENESS_SUB_QUESTIONS,
        },
    },
];

pub fn core4_questions() -> &'static [Question] {
    CORE4_QUESTIONS
}
