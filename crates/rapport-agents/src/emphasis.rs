//! Archetype emphasis instructions for the outreach copywriter.
//!
//! Each archetype gets a one-sentence psychological description and a block
//! of writing directives. Profiled archetypes split emphasis 60/40 between
//! their own language and the other three; `Balanced` splits evenly.

use rapport_core::Archetype;
use serde::Serialize;

/// Description and directives for one archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmphasisProfile {
    pub archetype: Archetype,
    pub description: &'static str,
    pub instructions: &'static str,
}

const DREAMER_DESCRIPTION: &str = "This person is motivated by transformation and breakthrough moments; they want to become more than they are today and fear stagnating or plateauing.";

const LOVER_DESCRIPTION: &str = "This person is motivated by relationships, belonging, and community; they value being part of a trusted network and fear missing out on meaningful connections.";

const SCHOLAR_DESCRIPTION: &str = "This person is motivated by making informed, well-researched decisions; they value evidence and clarity and fear making the wrong choice.";

const BOSS_DESCRIPTION: &str = "This person is motivated by achievement and results; they value efficiency and control and fear wasting time on anything that does not move them forward.";

const BALANCED_DESCRIPTION: &str = "This person's motivations are not yet known, so the message should appeal evenly to transformation, connection, evidence, and results.";

const DREAMER_INSTRUCTIONS: &str = "\
Lead with transformation. Spend roughly 60% of the message on Dreamer language:
- Paint the picture of the breakthrough: who they could become and what becomes possible.
- Use aspirational, forward-looking words such as \"breakthrough\", \"next level\", \"unlock\", \"transform\".
- Name the cost of staying stuck or plateauing, gently and without fear-mongering.
- Reference vision and momentum rather than features.

Use the remaining 40% to lightly cover the other motivations:
- Lover: one nod to the people or community involved.
- Scholar: one concrete proof point so the vision feels credible.
- Boss: one clear, low-effort next step.";

const LOVER_INSTRUCTIONS: &str = "\
Lead with connection. Spend roughly 60% of the message on Lover language:
- Emphasize relationships, community, and the people they will meet or help.
- Use warm, inclusive words such as \"together\", \"community\", \"introduce\", \"belong\".
- Reference any shared history, mutual contacts, or common ground first.
- Make it clear they will not be left out of the conversation or the network.

Use the remaining 40% to lightly cover the other motivations:
- Dreamer: one line on the growth this connection can spark.
- Scholar: one credible detail that builds trust.
- Boss: one simple, respectful call to action.";

const SCHOLAR_INSTRUCTIONS: &str = "\
Lead with evidence. Spend roughly 60% of the message on Scholar language:
- Offer data, specifics, and clear reasoning rather than hype.
- Use precise words such as \"research\", \"compare\", \"evidence\", \"informed\".
- Acknowledge trade-offs honestly so they can make the right choice with confidence.
- Offer a resource, case study, or detail they can evaluate on their own time.

Use the remaining 40% to lightly cover the other motivations:
- Dreamer: one line on the upside once the decision is made.
- Lover: one mention of others who made the same choice.
- Boss: one concise next step with no pressure.";

const BOSS_INSTRUCTIONS: &str = "\
Lead with results. Spend roughly 60% of the message on Boss language:
- Frame everything as specific, measurable outcomes: time saved, revenue gained, goals hit.
- Use decisive words such as \"results\", \"efficient\", \"achieve\", \"bottom line\".
- Be brief and get to the point in the first sentence; respect their time.
- End with one direct, concrete call to action.

Use the remaining 40% to lightly cover the other motivations:
- Dreamer: one line on the bigger win these results enable.
- Lover: one mention of the team or people who benefit.
- Scholar: one proof point that backs the claim.";

const BALANCED_INSTRUCTIONS: &str = "\
No dominant motivation is known. Split emphasis evenly, roughly 25% each:
- Dreamer: one line on growth, transformation, or a breakthrough outcome.
- Lover: one line on relationships, community, or shared connections.
- Scholar: one line with a concrete fact, example, or proof point.
- Boss: one line on results and a clear, efficient next step.

Keep the four strands woven into natural prose rather than a list, and let the
contact's reply reveal which motivation resonates most.";

/// Emphasis profile for an archetype.
pub fn describe(archetype: Archetype) -> EmphasisProfile {
    let (description, instructions) = match archetype {
        Archetype::Dreamer => (DREAMER_DESCRIPTION, DREAMER_INSTRUCTIONS),
        Archetype::Lover => (LOVER_DESCRIPTION, LOVER_INSTRUCTIONS),
        Archetype::Scholar => (SCHOLAR_DESCRIPTION, SCHOLAR_INSTRUCTIONS),
        Archetype::Boss => (BOSS_DESCRIPTION, BOSS_INSTRUCTIONS),
        Archetype::Balanced => (BALANCED_DESCRIPTION, BALANCED_INSTRUCTIONS),
    };

    EmphasisProfile {
        archetype,
        description,
        instructions,
    }
}

impl EmphasisProfile {
    /// Prompt section for the copywriter
    pub fn render(&self) -> String {
        format!(
            "=== BUYER PSYCHOLOGY ===\nArchetype: {}\n{}\n\nWriting directives:\n{}",
            self.archetype.label(),
            self.description,
            self.instructions
        )
    }
}
