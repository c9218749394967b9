//! Generic, type-keyed challenges. Content adapts to the step (when there is one), the player
//! class and the stack's framework family.

use crate::domain::{
  DecisionCategory, DecisionOption, DecisionPoint, DecisionTrigger, DecisionType, Framework, Platform, PlayerClass,
  Stack, StepType, VerificationChallenge, VerificationMode, VerificationType,
};
use crate::resources::Consequences;

use super::{option, ChallengeContext};

const REACT_FEATURES: [&str; 4] = ["drag-and-drop sorting", "real-time collaboration", "offline mode", "dark theme toggle"];
const FLUTTER_FEATURES: [&str; 4] = ["gesture recognition", "platform-specific UI", "background sync", "push notifications"];

fn suffix<'a>(ctx: &ChallengeContext<'a>) -> &'a str {
  ctx.step_id().unwrap_or("general")
}

fn test_framework(framework: Framework) -> &'static str {
  match framework {
    Framework::React => "Jest + React Testing Library",
    Framework::Flutter => "Flutter Test + Mockito",
  }
}

/// Test tooling named in scenarios. Next.js projects also get browser tests.
fn stack_test_framework(ctx: &ChallengeContext<'_>) -> &'static str {
  match ctx.stack {
    Stack::NextjsPrisma => "Jest + Playwright",
    _ => test_framework(ctx.framework()),
  }
}

pub fn get_contextual_decision(kind: DecisionType, ctx: &ChallengeContext<'_>) -> DecisionPoint {
  match kind {
    DecisionType::ScopeCreep => scope_creep(ctx),
    DecisionType::AiReview => ai_review(ctx),
    DecisionType::TestingApproach => testing_approach(ctx),
    DecisionType::TechChoice => tech_choice(ctx),
  }
}

fn decision(
  ctx: &ChallengeContext<'_>,
  prefix: &str,
  trigger: DecisionTrigger,
  title: &str,
  category: DecisionCategory,
  scenario: String,
  options: Vec<DecisionOption>,
) -> DecisionPoint {
  DecisionPoint {
    id: format!("decision-{prefix}-{}", suffix(ctx)),
    step_id: ctx.step_id().unwrap_or_default().to_string(),
    trigger,
    title: title.to_string(),
    scenario,
    category,
    options,
  }
}

fn scope_creep(ctx: &ChallengeContext<'_>) -> DecisionPoint {
  let features = ctx.by_framework(FLUTTER_FEATURES, REACT_FEATURES);
  let order = ctx.step.map(|s| s.order as usize).unwrap_or(0);
  let feature = features[order % features.len()];
  let task = ctx.step.map(|s| s.title.as_str()).unwrap_or("current task");
  let architect = ctx.is(PlayerClass::Architect);

  let mut scenario = format!(
    "Your PM just messaged: \"Can we add {feature}? It should only take a few minutes with AI, right?\"\n\n\
     You're in the middle of: {task}\nStack: {}",
    ctx.stack.display_name()
  );
  if architect {
    scenario.push_str("\n\n💡 As an architect, you know the real cost of scope changes.");
  }

  decision(
    ctx,
    "scope",
    DecisionTrigger::BeforeStep,
    "🚨 Scope Creep Alert!",
    DecisionCategory::ScopeManagement,
    scenario,
    vec![
      option(
        "accept-scope",
        "Sure, I'll add it now!",
        format!("Ask the AI to add {feature} right away"),
        Consequences::new().sanity(-15).coffee(-20).xp(10).tech_debt(25).ai_trust(-10),
        false,
        if architect {
          "As an architect, you know this adds complexity. Bad call."
        } else {
          "Adding features mid-sprint increases complexity and tech debt."
        },
      ),
      option(
        "defer-scope",
        "Let's add it to the backlog",
        "Finish the current task first, then prioritize",
        Consequences::new().sanity(5).coffee(0).xp(25).tech_debt(0).ai_trust(5),
        true,
        "Protecting focus is a senior skill. The feature can wait.",
      ),
      option(
        "negotiate-scope",
        "What's the minimal version?",
        "Negotiate a smaller slice of the feature",
        Consequences::new().sanity(0).coffee(-10).xp(35).tech_debt(5).ai_trust(0),
        ctx.is(PlayerClass::CoPilot),
        "Finding the MVP of a request is a great compromise.",
      ),
    ],
  )
}

fn ai_review(ctx: &ChallengeContext<'_>) -> DecisionPoint {
  let task = ctx.step.map(|s| s.title.as_str()).unwrap_or("your feature");
  let scenario = format!(
    "The AI just generated 150 lines of {} code for {task}.\n\n\
     It compiles. The demo works. But you haven't read most of it.\n\nWhat do you do?",
    ctx.stack.display_name()
  );
  let debt = if ctx.is(PlayerClass::VibeSurfer) { 30 } else { 15 };

  decision(
    ctx,
    "ai-review",
    DecisionTrigger::AfterStep,
    "🤖 AI Code Review",
    DecisionCategory::AiUsage,
    scenario,
    vec![
      option(
        "trust-ai",
        "Ship it, the AI knows best",
        "If it works, it works",
        Consequences::new().sanity(5).coffee(5).xp(5).tech_debt(debt).ai_trust(-15).code_quality(-10),
        false,
        "Unreviewed code is a time bomb. You can't maintain what you don't understand.",
      ),
      option(
        "review-understand",
        "Read it line by line",
        "Make sure you understand every part",
        Consequences::new().sanity(-5).coffee(-10).xp(40).tech_debt(0).ai_trust(10).code_quality(15),
        true,
        "Understanding the code is what makes AI assistance safe.",
      ),
      option(
        "refactor-improve",
        "Review and refactor",
        "Understand it, then make it yours",
        Consequences::new().sanity(-10).coffee(-20).xp(60).tech_debt(-10).ai_trust(15).code_quality(25),
        ctx.is(PlayerClass::Architect),
        "Highest quality outcome, at a real time cost.",
      ),
    ],
  )
}

fn testing_approach(ctx: &ChallengeContext<'_>) -> DecisionPoint {
  let scenario = format!(
    "Time to think about tests for {}.\n\nYour stack uses {}.\n\
     The AI offers to \"generate a full test suite in seconds\".",
    ctx.step.map(|s| s.title.as_str()).unwrap_or("this feature"),
    stack_test_framework(ctx)
  );

  decision(
    ctx,
    "testing",
    DecisionTrigger::BeforeStep,
    "🧪 Testing Strategy",
    DecisionCategory::QualityTradeoff,
    scenario,
    vec![
      option(
        "skip-tests",
        "Skip tests for now",
        "We'll add them later (we won't)",
        Consequences::new().sanity(10).coffee(10).xp(5).tech_debt(35).code_quality(-20),
        false,
        "\"Later\" never comes. Untested code breaks silently.",
      ),
      option(
        "ai-generate-tests",
        "Let the AI generate tests",
        "Fast coverage, unknown quality",
        Consequences::new().sanity(0).coffee(-5).xp(20).tech_debt(10).ai_trust(-5).code_quality(5),
        ctx.is(PlayerClass::VibeSurfer),
        "Better than nothing, but generated tests often assert the wrong things.",
      ),
      option(
        "write-thoughtful-tests",
        "Write focused tests yourself",
        "Test behavior that matters to users",
        Consequences::new().sanity(-10).coffee(-15).xp(50).tech_debt(-15).ai_trust(10).code_quality(30),
        ctx.is(PlayerClass::Architect) || ctx.is(PlayerClass::CoPilot),
        "Thoughtful tests document intent and catch real regressions.",
      ),
    ],
  )
}

fn tech_choice(ctx: &ChallengeContext<'_>) -> DecisionPoint {
  let step_type = ctx.step_type();
  let scenario = match step_type {
    Some(StepType::Configuration) => format!(
      "Configuring your {} project.\n\nThe AI suggests a setup with 14 plugins and 3 config files.\n\
       The docs suggest the defaults.",
      ctx.stack.display_name()
    ),
    Some(StepType::Deployment) => format!(
      "Deploying your {} app.\n\nOne-click deploy is right there.\n\
       But a custom pipeline would give you full control...",
      ctx.stack.display_name()
    ),
    _ => format!(
      "A technical choice for your {} app.\n\nSimple and done today, or flexible and done next week?",
      ctx.stack.display_name()
    ),
  };

  let options = if step_type == Some(StepType::Deployment) {
    vec![
      option(
        "quick-deploy",
        "One-click deploy",
        "Use the platform defaults",
        Consequences::new().xp(15).tech_debt(5),
        ctx.is(PlayerClass::VibeSurfer),
        "Shipping beats perfecting. You can customize later.",
      ),
      option(
        "custom-deploy",
        "Custom pipeline",
        "CI, previews, environment promotion",
        Consequences::new().xp(40).coffee(-15).tech_debt(-10),
        ctx.is(PlayerClass::Architect),
        "More work now, fewer surprises later.",
      ),
    ]
  } else {
    vec![
      option(
        "simple-approach",
        "Keep it simple",
        "Defaults and the smallest setup that works",
        Consequences::new().xp(20).sanity(5),
        true,
        "Simple setups are easy to understand and change.",
      ),
      option(
        "complex-approach",
        "Go all in",
        "Every plugin and option, just in case",
        Consequences::new().xp(10).tech_debt(20).sanity(-10),
        false,
        "YAGNI - You Ain't Gonna Need It.",
      ),
    ]
  };

  decision(ctx, "tech", DecisionTrigger::BeforeStep, "⚙️ Technical Decision", DecisionCategory::TechnicalChoice, scenario, options)
}

pub fn get_contextual_verification(kind: VerificationType, ctx: &ChallengeContext<'_>) -> VerificationChallenge {
  match kind {
    VerificationType::StateManagement => state_management(ctx),
    VerificationType::ComponentStructure => component_structure(ctx),
    VerificationType::SpotTheBug => spot_the_bug(ctx),
    VerificationType::PredictOutput => predict_output(ctx),
  }
}

fn state_management(ctx: &ChallengeContext<'_>) -> VerificationChallenge {
  let (label, code, concepts): (&str, &str, &[&str]) = match ctx.framework() {
    Framework::React => (
      "React useState",
      "const [todos, setTodos] = useState([]);
const [filter, setFilter] = useState('all');

const visibleTodos = useMemo(() => {
  if (filter === 'active') return todos.filter(t => !t.completed);
  if (filter === 'completed') return todos.filter(t => t.completed);
  return todos;
}, [todos, filter]);",
      &["useState", "useMemo", "filter", "derived state", "dependency array"],
    ),
    Framework::Flutter => (
      "Flutter State",
      "class TodoModel extends ChangeNotifier {
  final List<Todo> _todos = [];
  String _filter = 'all';

  List<Todo> get visibleTodos => switch (_filter) {
    'active' => _todos.where((t) => !t.completed).toList(),
    'completed' => _todos.where((t) => t.completed).toList(),
    _ => _todos,
  };

  void setFilter(String filter) {
    _filter = filter;
    notifyListeners();
  }
}",
      &["ChangeNotifier", "getter", "state"],
    ),
  };
  let xp = if ctx.is(PlayerClass::VibeSurfer) { 20 } else { 40 };

  VerificationChallenge::new(
    format!("verify-state-{}", suffix(ctx)),
    VerificationMode::ExplainCode,
    format!("Explain: {label} State"),
    "The AI wrote this state logic. Explain how it works in your own words.",
  )
  .code(code)
  .concepts(concepts)
  .hints(&[
    ("state", "Where does the data live, and who can change it?"),
    ("filter", "How is the visible list picked out of all todos?"),
    ("derived", "Which values are computed instead of stored?"),
    ("reactivity", "What makes the UI update when something changes?"),
  ])
  .rewards(xp, 15)
}

fn component_structure(ctx: &ChallengeContext<'_>) -> VerificationChallenge {
  let label = match (ctx.framework(), ctx.platform) {
    (Framework::Flutter, Platform::Mobile) => "Flutter Widget",
    (Framework::React, _) => "React",
    (Framework::Flutter, Platform::Web) => "UI",
  };
  let flutter_widget = ctx.is_flutter() && ctx.platform == Platform::Mobile;
  let (code, concepts): (&str, &[&str]) = if flutter_widget {
    (
      "class TodoItem extends StatelessWidget {
  final Todo todo;
  final ValueChanged<bool?> onChanged;

  const TodoItem({super.key, required this.todo, required this.onChanged});

  @override
  Widget build(BuildContext context) {
    return ListTile(
      leading: Checkbox(value: todo.completed, onChanged: onChanged),
      title: Text(
        todo.title,
        style: TextStyle(
          decoration: todo.completed ? TextDecoration.lineThrough : null,
        ),
      ),
    );
  }
}",
      &["StatelessWidget", "build", "ListTile", "onChanged", "TextStyle"],
    )
  } else {
    (
      "interface TodoItemProps {
  todo: Todo;
  onToggle: (id: string) => void;
}

export function TodoItem({ todo, onToggle }: TodoItemProps) {
  return (
    <li
      onClick={() => onToggle(todo.id)}
      className={todo.completed ? 'line-through text-gray-400' : ''}
    >
      {todo.title}
    </li>
  );
}",
      &["props", "interface", "event handler", "conditional styling", "component"],
    )
  };

  VerificationChallenge::new(
    format!("verify-component-{}", suffix(ctx)),
    VerificationMode::ExplainCode,
    format!("Explain: {label} Component"),
    "Walk through how this component is put together.",
  )
  .code(code)
  .concepts(concepts)
  .rewards(35, 10)
}

fn spot_the_bug(ctx: &ChallengeContext<'_>) -> VerificationChallenge {
  let (code, line, location, explanation) = match ctx.framework() {
    Framework::React => (
      "function TodoList() {
  const [items, setItems] = useState([]);

  const addItem = (newItem) => {
    items.push(newItem);
    setItems(items);
  };

  return <List items={items} onAdd={addItem} />;
}",
      5,
      "The mutation happens here",
      "In React, you must never mutate state directly. Use setItems([...items, newItem]) instead.",
    ),
    Framework::Flutter => (
      "class TodoList extends StatefulWidget {
  @override
  State<TodoList> createState() => _TodoListState();
}

class _TodoListState extends State<TodoList> {
  final List<String> items = [];

  @override
  Widget build(BuildContext context) {
    return TodoView(items: items, onAdd: (item) {
      items.add(item);
    });
  }
}",
      12,
      "setState() is missing",
      "In Flutter StatefulWidget, you must call setState() to trigger a rebuild when state changes.",
    ),
  };

  VerificationChallenge::new(
    format!("verify-bug-{}", suffix(ctx)),
    VerificationMode::SpotTheBug,
    "🐛 Find the Bug",
    format!("The AI generated this {} code. Can you spot the issue?", ctx.stack.display_name()),
  )
  .code(code)
  .bug(line, location, explanation)
  .concepts(&["bug", "fix", "error"])
  .rewards(50, 20)
}

fn predict_output(ctx: &ChallengeContext<'_>) -> VerificationChallenge {
  let challenge = VerificationChallenge::new(
    format!("verify-predict-{}", suffix(ctx)),
    VerificationMode::PredictOutput,
    "🔮 Predict the Output",
    "What will this code output?",
  );
  let challenge = match ctx.framework() {
    Framework::React => challenge
      .code(
        "function Counter() {
  const [count, setCount] = useState(0);

  useEffect(() => {
    console.log('Effect ran, count:', count);
  }, [count]);

  const handleClick = () => {
    setCount(c => c + 1);
    setCount(c => c + 1);
  };

  // The user clicks the button once.
  return <button onClick={handleClick}>{count}</button>;
}

// What is the last line logged?",
      )
      .expect("Effect ran, count: 2", &["Effect ran, count: 1", "Effect ran, count: 0", "Nothing is logged"]),
    Framework::Flutter => challenge
      .code(
        "final numbers = [1, 2, 3, 4, 5];

final result = numbers
    .where((n) => n > 2)
    .map((n) => n * 2)
    .reduce((a, b) => a + b);

print(result);",
      )
      .expect("24", &["30", "15", "12"]),
  };
  challenge.concepts(&["output", "result"]).rewards(30, 10)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::curriculum::{generate_curriculum, step_by_id};
  use crate::domain::Selection;

  #[test]
  fn ids_fall_back_to_general_without_a_step() {
    let ctx = ChallengeContext::new(None, Selection::default());
    let d = get_contextual_decision(DecisionType::ScopeCreep, &ctx);
    assert_eq!(d.id, "decision-scope-general");
    assert_eq!(d.step_id, "");
    let v = get_contextual_verification(VerificationType::PredictOutput, &ctx);
    assert_eq!(v.id, "verify-predict-general");
  }

  #[test]
  fn scope_creep_mentions_the_step_and_a_framework_feature() {
    let sel = Selection::new(PlayerClass::Architect, Platform::Web, Stack::ReactNode);
    let steps = generate_curriculum(sel);
    let step = step_by_id(&steps, "skeleton-1").unwrap();
    let ctx = ChallengeContext::new(Some(step), sel);
    let d = get_contextual_decision(DecisionType::ScopeCreep, &ctx);
    assert_eq!(d.id, "decision-scope-skeleton-1");
    assert!(d.scenario.contains(&step.title));
    assert!(REACT_FEATURES.iter().any(|f| d.scenario.contains(f)));
    assert!(d.scenario.contains("As an architect"));
    let accept = d.option("accept-scope").unwrap();
    assert!(!accept.is_optimal);
    assert_eq!(accept.consequences.tech_debt_change, Some(25));
  }

  #[test]
  fn deployment_tech_choice_offers_deploy_options() {
    let sel = Selection::default();
    let steps = generate_curriculum(sel);
    let deploy = steps.iter().find(|s| s.step_type == StepType::Deployment).unwrap();
    let ctx = ChallengeContext::new(Some(deploy), sel);
    let d = get_contextual_decision(DecisionType::TechChoice, &ctx);
    let ids: Vec<&str> = d.options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["quick-deploy", "custom-deploy"]);
  }

  #[test]
  fn vibe_surfer_gets_heavier_debt_for_blind_trust() {
    let vibe = ChallengeContext::new(None, Selection::default());
    let d = get_contextual_decision(DecisionType::AiReview, &vibe);
    assert_eq!(d.option("trust-ai").unwrap().consequences.tech_debt_change, Some(30));
    assert_eq!(d.trigger, DecisionTrigger::AfterStep);
  }

  #[test]
  fn predict_output_answers_match_their_snippets() {
    let flutter = Selection::new(PlayerClass::CoPilot, Platform::Mobile, Stack::FlutterFirebase);
    let v = get_contextual_verification(VerificationType::PredictOutput, &ChallengeContext::new(None, flutter));
    let code = v.code_to_explain.as_deref().unwrap();
    assert!(code.contains("[1, 2, 3, 4, 5]") && code.contains("n > 2") && code.contains("n * 2"));
    // same pipeline: where(n > 2).map(n * 2).reduce(+)
    let traced: i32 = [1, 2, 3, 4, 5].iter().filter(|n| **n > 2).map(|n| n * 2).sum();
    assert_eq!(v.expected_output.as_deref(), Some(traced.to_string().as_str()));
    assert!(v.output_options.contains(&traced.to_string()));
    assert!(crate::scoring::score_verification(&v, &traced.to_string(), false).passed);

    // two functional updates in one click: the effect sees 2
    let react = get_contextual_verification(VerificationType::PredictOutput, &ChallengeContext::new(None, Selection::default()));
    let code = react.code_to_explain.as_deref().unwrap();
    assert_eq!(code.matches("setCount(c => c + 1);").count(), 2);
    assert_eq!(react.expected_output.as_deref(), Some("Effect ran, count: 2"));
  }

  #[test]
  fn flutter_component_structure_names_widgets() {
    let sel = Selection::new(PlayerClass::CoPilot, Platform::Mobile, Stack::FlutterFirebase);
    let ctx = ChallengeContext::new(None, sel);
    let c = get_contextual_verification(VerificationType::ComponentStructure, &ctx);
    assert_eq!(c.title, "Explain: Flutter Widget Component");
    assert!(c.required_concepts.contains(&"StatelessWidget".to_string()));
  }
}
