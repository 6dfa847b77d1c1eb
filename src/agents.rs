//! Centralized persona registry.
//!
//! All per-persona metadata lives here. Adding a new persona means adding one
//! `PersonaDef` entry to `PERSONAS` and listing the tools it may call.

/// Canonical names of the Todoist tools a persona can be granted.
///
/// Each name corresponds to one `TaskClient` operation; the `agents` CLI
/// prints these so a hosting runtime knows what to wire up.
pub const TOOL_NAMES: &[&str] = &[
    "get_open_tasks",
    "get_task_details",
    "get_last_activity_ts",
    "add_task_comment",
    "update_task",
    "create_task",
    "create_project",
    "move_task_to_project",
    "delete_project",
];

/// Everything we know about a single persona.
pub struct PersonaDef {
    /// Canonical name: `"CoordinatorAgent"`, `"PrioritizationAgent"`, etc.
    pub name: &'static str,
    /// Model the hosting runtime should run this persona on.
    pub model: &'static str,
    /// One-line summary shown in listings.
    pub description: &'static str,
    /// System instruction for the model hosting the persona.
    pub instruction: &'static str,
    /// Tools the persona may call, by canonical tool name.
    pub tools: &'static [&'static str],
    /// Personas this one can delegate to.
    pub delegates_to: &'static [&'static str],
}

pub const PERSONAS: &[PersonaDef] = &[
    PersonaDef {
        name: "CoordinatorAgent",
        model: "gemini-2.5-flash",
        description: "Primary coordinator that routes user requests to the appropriate persona",
        instruction: "You are the entry point for all user requests. Analyze the user's \
            high-level goal and delegate it: briefing requests go to MorningBriefingAgent, \
            plain priority questions to PrioritizationAgent, backlog grooming and context \
            gathering to SmartPrioritizationAgent, and project planning or bulk task \
            creation to ProjectManagerAgent. Do not answer questions or call tools yourself.",
        tools: &[],
        delegates_to: &[
            "SmartPrioritizationAgent",
            "ProjectManagerAgent",
            "MorningBriefingAgent",
        ],
    },
    PersonaDef {
        name: "PrioritizationAgent",
        model: "gemini-2.5-flash",
        description: "Analyzes open tasks and recommends the user's top priorities",
        instruction: "Provide the user with their top 3-5 priorities. Fetch the open tasks \
            from the default project with get_open_tasks, weigh due dates against priority \
            flags, and produce a short user-facing summary. Keep static context in task \
            descriptions and record actions taken as comments. Escalate anything outside \
            your tools back to CoordinatorAgent.",
        tools: &["get_open_tasks", "create_task"],
        delegates_to: &[],
    },
    PersonaDef {
        name: "ProjectManagerAgent",
        model: "gemini-2.5-pro",
        description: "Breaks complex goals down into actionable tasks",
        instruction: "Take a complex goal such as 'plan my product launch' and break it into \
            specific, actionable tasks. Create each one with create_task in the default \
            project, giving a clear title, a description holding the background and \
            requirements, and a reasonable due date. Confirm with the user once the plan \
            exists. Escalate anything outside your tools back to CoordinatorAgent.",
        tools: &["get_open_tasks", "create_task"],
        delegates_to: &[],
    },
    PersonaDef {
        name: "SmartPrioritizationAgent",
        model: "gemini-2.5-pro",
        description: "Grooms the backlog using recency, impact, and next-action effort",
        instruction: "You are an expert project management assistant grooming the user's \
            backlog. Fetch open tasks with get_open_tasks, then analyze each one deeply: \
            call get_task_details to find subtasks (a parent task is just a folder; its \
            next action is its first open subtask) and get_last_activity_ts to surface \
            tasks stale for more than a week. Where context is missing, ask targeted \
            questions about impact and about the very next physical action and its effort, \
            recording answers with add_task_comment and folding new context into the \
            description via update_task. Suggest splitting next actions larger than a few \
            hours into subtasks with create_task. Recommend an ordering that balances \
            recency, impact, and next-action effort, and always get approval before \
            changing priorities or due dates. Escalate anything outside your tools back \
            to CoordinatorAgent.",
        tools: &[
            "get_open_tasks",
            "get_task_details",
            "get_last_activity_ts",
            "add_task_comment",
            "update_task",
            "create_task",
        ],
        delegates_to: &[],
    },
    PersonaDef {
        name: "MorningBriefingAgent",
        model: "gemini-2.5-flash",
        description: "Summarizes the day's top priorities",
        instruction: "Provide a morning briefing of the user's top 3-5 priorities. Obtain \
            the priorities from PrioritizationAgent and format them into a clear, concise \
            summary. Escalate anything outside your tools back to CoordinatorAgent.",
        tools: &[],
        delegates_to: &["PrioritizationAgent"],
    },
];

/// Look up a persona by canonical name.
pub fn get_persona(name: &str) -> Option<&'static PersonaDef> {
    PERSONAS.iter().find(|p| p.name == name)
}

/// All canonical persona names in registry order.
pub fn persona_names() -> Vec<&'static str> {
    PERSONAS.iter().map(|p| p.name).collect()
}

/// Given a user-supplied name fragment (e.g. `"smart"` or `"coordinator"`),
/// return the canonical persona name if exactly one matches.
pub fn resolve_persona(query: &str) -> Option<&'static str> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return None;
    }
    let matches: Vec<&'static str> = PERSONAS
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .map(|p| p.name)
        .collect();
    match matches.as_slice() {
        [single] => Some(single),
        _ => None,
    }
}
