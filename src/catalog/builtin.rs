//! Built-in example programs
//!
//! The canonical examples bundled with the documentation site, in the
//! order they appear in the selector. Each pairs its source text with the
//! exact output lines the simulator must display for a verbatim run.

use crate::models::Example;

/// Build the bundled examples in authoring order
pub(super) fn builtin_examples() -> Vec<Example> {
    vec![
        Example::new(
            "hello.bang",
            r#"// Hello World in BanglaCode
dekho("Hello, West Bengal!");
dekho("Namaskar!");

// Variables
dhoro naam = "Ankan";
dhoro boyosh = 25;
dekho("Amar naam", naam, "ebong ami", boyosh, "bochhor boyoshi");

// Type conversion
dekho("Type of naam:", dhoron(naam));
dekho("Type of boyosh:", dhoron(boyosh));
dekho("boyosh as lipi:", lipi(boyosh));"#,
            vec![
                "Hello, West Bengal!".to_string(),
                "Namaskar!".to_string(),
                "Amar naam Ankan ebong ami 25 bochhor boyoshi".to_string(),
                "Type of naam: string".to_string(),
                "Type of boyosh: int".to_string(),
                "boyosh as lipi: 25".to_string(),
            ],
        ),
        Example::new(
            "fibonacci.bang",
            r#"// Fibonacci Sequence
kaj fibonacci(n) {
    jodi (n <= 1) {
        ferao n;
    }
    ferao fibonacci(n - 1) + fibonacci(n - 2);
}

dekho("Fibonacci of 10:", fibonacci(10));

// Generate first 10 numbers
dekho("First 10 Fibonacci numbers:");
ghuriye (dhoro i = 0; i < 10; i = i + 1) {
    dekho(fibonacci(i));
}"#,
            vec![
                "Fibonacci of 10: 55".to_string(),
                "First 10 Fibonacci numbers:".to_string(),
                "0".to_string(),
                "1".to_string(),
                "1".to_string(),
                "2".to_string(),
                "3".to_string(),
                "5".to_string(),
                "8".to_string(),
                "13".to_string(),
                "21".to_string(),
                "34".to_string(),
            ],
        ),
        Example::new(
            "homepage_demo.bang",
            r#"// Loop example from Home Page
dhoro i = 0;
jotokkhon (i < 5) {
  dekho("Count: " + i);
  i = i + 1;
}"#,
            vec![
                "Count: 0".to_string(),
                "Count: 1".to_string(),
                "Count: 2".to_string(),
                "Count: 3".to_string(),
                "Count: 4".to_string(),
            ],
        ),
        Example::new(
            "conditions.bang",
            r#"// Conditionals
dhoro score = 85;

jodi (score >= 90) {
    dekho("Grade: A");
} nahole jodi (score >= 80) {
    dekho("Grade: B");
} nahole {
    dekho("Grade: C");
}

dekho("Score:", score);"#,
            vec!["Grade: B".to_string(), "Score: 85".to_string()],
        ),
        Example::new(
            "classes.bang",
            r#"// Classes and Objects
sreni Manush {
    shuru(naam, boyosh) {
        ei.naam = naam;
        ei.boyosh = boyosh;
    }

    kaj porichoy() {
        dekho("Amar naam", ei.naam, "ebong ami", ei.boyosh, "bochhor boyoshi");
    }

    kaj birthday() {
        ei.boyosh = ei.boyosh + 1;
        dekho(ei.naam, "er ekhon", ei.boyosh, "bochhor");
    }
}

dhoro Ankan = notun Manush("Ankan", 25);
Ankan.porichoy();
Ankan.birthday();"#,
            vec![
                "Amar naam Ankan ebong ami 25 bochhor boyoshi".to_string(),
                "Ankan er ekhon 26 bochhor".to_string(),
            ],
        ),
    ]
}
