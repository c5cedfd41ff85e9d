// Integration tests for translated Tampio programs
// Each test strings runtime calls together the way generated code does,
// with scripted input, an in-memory page and a fixed clock standing in for the host.

use tampio_runtime::{
    Clock, DateComponents, FixedClock, Lista, MemoryPage, Moment, Muuttuja, Page, RuntimeError, ScriptedPrompt,
    Value, divisors, factorial, power, prime_factors, repeat_n_times, round_to, sqrt, to_text,
};

#[test]
fn test_read_number_and_show_factorial() {
    let mut prompt = ScriptedPrompt::new(["5"]);
    let mut page = MemoryPage::new();

    let luku: Muuttuja<f64> = Muuttuja::from_fields([("arvo", 0.0)]);
    luku.prompt_read(&mut prompt);

    let n = luku.get().unwrap_or(f64::NAN);
    page.show(&Value::Number(factorial(n))).unwrap();

    assert_eq!(page.written(), "120\n");
}

#[test]
fn test_unparsable_input_flows_through_as_nan() {
    let mut prompt = ScriptedPrompt::new(["viisi"]);
    let mut page = MemoryPage::new();

    let luku: Muuttuja<f64> = Muuttuja::new();
    luku.prompt_read(&mut prompt);
    let n = luku.get().unwrap_or(f64::NAN);

    page.show(&Value::Number(sqrt(n))).unwrap();
    page.show(&Value::Number(power(n).call("1"))).unwrap();

    assert_eq!(page.written(), "NaN\nNaN\n");
}

#[test]
fn test_divisors_and_prime_factors_into_lists() {
    let mut page = MemoryPage::new();

    let tekijat: Lista<Value> = divisors(12i64)
        .into_iter()
        .map(|d| Value::Number(d as f64))
        .collect();
    page.show(&Value::List(tekijat.clone())).unwrap();

    let alkutekijat: Lista<Value> = prime_factors(360i64)
        .into_iter()
        .map(|p| Value::Number(p as f64))
        .collect();
    page.show(&Value::List(alkutekijat)).unwrap();

    // A prime has no prime factors below itself
    assert!(prime_factors(97i64).is_empty());
    assert_eq!(tekijat.size(), 6);
    assert_eq!(page.written(), "1,2,3,4,6,12\n2,3,5\n");
}

#[test]
fn test_sum_list_by_walking_tails() {
    // Recursive sum over head/tail, the way list programs are translated
    fn summa(list: &Lista<f64>) -> f64 {
        match list.head() {
            Some(first) => first + summa(&list.tail()),
            None => 0.0,
        }
    }

    let list = Lista::from(vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(summa(&list), 10.0);
    // Walking the tails leaves the original alone
    assert_eq!(list.size(), 4);
}

#[test]
fn test_repeat_builds_list_of_powers() {
    let potenssit: Lista<f64> = Lista::new();
    let laskuri = Muuttuja::with_value(0.0);

    let result: Result<(), RuntimeError> = repeat_n_times(4, || {
        let i = laskuri.get().unwrap_or(0.0);
        potenssit.append(power(2.0).call(&to_text(i)));
        laskuri.set(i + 1.0);
        Ok(())
    });

    assert!(result.is_ok());
    assert_eq!(potenssit.elements(), vec![2.0, 4.0, 8.0, 16.0]);
    assert_eq!(potenssit.index_of(&8.0), 2);
    assert_eq!(potenssit.index_of(&3.0), -1);
}

#[test]
fn test_repeat_stops_at_first_failure() {
    let mut prompt = ScriptedPrompt::new(["1", "x", "3"]);
    let luvut: Lista<f64> = Lista::new();
    let luku: Muuttuja<f64> = Muuttuja::new();

    let result = repeat_n_times(3, || {
        luku.prompt_read(&mut prompt);
        match luku.get() {
            Some(n) if !n.is_nan() => {
                luvut.append(n);
                Ok(())
            }
            _ => Err(RuntimeError::TypeError("not a number".to_string())),
        }
    });

    assert!(matches!(result, Err(RuntimeError::TypeError(_))));
    assert_eq!(luvut.elements(), vec![1.0]);
    // The third answer was never asked for
    assert_eq!(prompt.remaining(), 1);
}

#[test]
fn test_click_counter_page() {
    let mut page = MemoryPage::new();
    page.add_element("nappi");
    let tulos = page.add_element("tulos");

    let napit = Muuttuja::new();
    page.find_element_into("nappi", &napit);
    let Some(Value::Element(nappi)) = napit.get() else {
        panic!("button not found: {:?}", napit);
    };

    let painallukset = Muuttuja::with_value(0.0);
    let laskuri = painallukset.clone();
    page.bind_click(
        &nappi,
        Box::new(move || {
            let n = laskuri.get().unwrap_or(0.0);
            laskuri.set(n + 1.0);
            Ok(())
        }),
    )
    .unwrap();

    for _ in 0..3 {
        page.click(&nappi).unwrap();
    }

    page.clear_content(&tulos).unwrap();
    let teksti = to_text(painallukset.get().unwrap_or(f64::NAN));
    page.append_content(&tulos, &teksti).unwrap();
    assert_eq!(page.content(&tulos), Some("3"));

    let puuttuva = Muuttuja::new();
    page.find_element_into("puuttuva", &puuttuva);
    assert_eq!(puuttuva.get(), Some(Value::Null));
}

#[test]
fn test_clock_values_on_page() {
    // 2026-10-18T09:05:07.250Z viewed from Helsinki (UTC+3 in summer time)
    let components = DateComponents {
        year: 2026,
        month: 10,
        day: 18,
        hour: 12,
        minute: 5,
        second: 7,
        offset_minutes: 180,
    };
    let clock = FixedClock::new(Moment::new(1_792_314_307_250, components));
    let mut page = MemoryPage::new();

    let hetki = clock.now();
    page.show(&Value::from(hetki.full_text())).unwrap();
    page.show(&Value::Number(hetki.year() as f64)).unwrap();

    assert_eq!(page.written(), "18.10.2026 12.05.07\n2026\n");
    assert_eq!(hetki.epoch_millis(), 1_792_314_307_250);
}

#[test]
fn test_rounding_for_display() {
    let mut page = MemoryPage::new();
    let keskiarvo = 10.0 / 3.0;
    page.show(&Value::Number(round_to(keskiarvo, 2))).unwrap();
    assert_eq!(page.written(), "3.33\n");
}

#[cfg(feature = "datetime")]
#[test]
fn test_system_clock_fields_for_instant() {
    use tampio_runtime::host::linux::moment_at;

    let hetki = moment_at(1_792_314_307_250, 180).expect("instant in range");
    assert_eq!(hetki.full_text(), "18.10.2026 12.05.07");

    // Far outside the calendar: no moment instead of a crash
    assert!(moment_at(i64::MAX, 60).is_none());
}
