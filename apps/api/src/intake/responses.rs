// Canned chat replies, one per response category.
// Plain data: the intent matcher decides which one is sent.

/// Opening message for greetings.
pub const GREETING_RESPONSE: &str = r#"Hello! Welcome to the candidate intake assistant. I'm here to help you with your application for the Prompt Engineer position.

I can help you with:
• Understanding the role requirements
• Evaluating your qualifications
• Walking you through the application process
• Answering questions about prompt engineering

How can I help you today?"#;

/// Requirements overview and next steps for applicants.
pub const APPLICATION_RESPONSE: &str = r#"Great! You're interested in applying for the Prompt Engineer position.

**Key Requirements:**
• Genuine interest and hands-on experience in prompt engineering
• Projects related to prompt engineering
• Skills in NLP, ML, Python and AI models
• Experience with data analysis and experimentation

**Next Steps:**
1. Share your relevant experience and projects
2. I'll evaluate your qualifications
3. If you are a good fit, you'll receive an assignment within 1-2 days

Please tell me about your prompt engineering experience and projects."#;

/// Asks the candidate to describe their background.
pub const EXPERIENCE_INQUIRY_RESPONSE: &str = r#"I'd love to hear more about your background! Please share:

• Your experience with prompt engineering projects
• Technical skills (Python, NLP, ML frameworks)
• Experience with AI models (GPT, BERT, etc.)
• Any relevant research or innovation work
• Data analysis and experimentation experience

The more detail you provide, the better I can evaluate your fit for the role."#;

/// Describes the technical focus of the role.
pub const TECHNICAL_RESPONSE: &str = r#"Excellent! Prompt engineering is at the core of this role.

**Focus Areas:**
• Design and test prompt strategies to get the most out of AI models
• Collaborate with cross-functional teams
• Measure prompt effectiveness with metrics
• Document experiments and insights
• Keep up with the latest NLP research

Which prompt engineering projects or techniques have you worked with?"#;

/// Lists the topics the assistant can help with.
pub const HELP_RESPONSE: &str = r#"I'm here to help! You can ask me about:

• Role requirements and responsibilities
• The application process and timeline
• Technical questions about prompt engineering
• The team and its culture
• Next steps in the hiring process

What would you like to know?"#;

/// Fallback when no trigger word matched.
pub const DEFAULT_RESPONSE: &str = r#"I understand you're interested in the Prompt Engineer position.

To help you better, could you:
• Tell me about your prompt engineering experience
• Share relevant projects you've worked on
• Ask specific questions about the role

I'm here to evaluate your qualifications and guide you through the application process!"#;

/// Generic user-facing message returned when a chat turn cannot be completed.
pub const APOLOGY_RESPONSE: &str =
    "I apologize, but I'm having trouble processing your request. Please try again.";
