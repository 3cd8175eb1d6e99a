use crate::constants::{FINAL_ANSWER_PROMPT, TOOL_USAGE_PROMPT};
use crate::crew::{RoleDescriptor, WorkItem};
use crate::tools::ToolManager;

/// System prompt describing the agent that plays `descriptor`
pub(super) fn system_prompt(descriptor: &RoleDescriptor, tools: &ToolManager) -> String {
    let mut prompt = format!(
        "You are {}.\n{}\n\nYour personal goal is: {}",
        descriptor.name, descriptor.backstory, descriptor.goal
    );

    if !tools.is_empty() && !descriptor.tools.is_empty() {
        prompt.push_str("\n\nYou have access to the following tools:\n");
        prompt.push_str(&tools.catalogue());
        prompt.push_str("\n\n");
        prompt.push_str(TOOL_USAGE_PROMPT);
    }

    prompt
}

/// User prompt of a work item, including the outputs of the items already done
pub(super) fn item_prompt(item: &WorkItem, context: &[String]) -> String {
    let mut prompt = format!(
        "Current task: {}\n\nThis is the expected criteria for your final answer: {}",
        item.description(),
        item.expected_output()
    );

    if !context.is_empty() {
        prompt.push_str("\n\nThis is the context you're working with:\n");
        prompt.push_str(&context.join("\n\n----------\n\n"));
    }

    prompt.push_str("\n\n");
    prompt.push_str(FINAL_ANSWER_PROMPT);
    prompt
}
