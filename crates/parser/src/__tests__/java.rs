//! Java statement corpus.

#[cfg(test)]
mod tests {
  use crate::__tests__::helpers::{assert_compound, assert_statements};

  #[test]
  fn test_blocks_and_simple_statements() {
    assert_statements(
      "java",
      "
      ▶️public class BlockSample {
          ▶️public static void main(String[] args) ▶️{
              ▶️{}◀️
              ▶️int x = 10;◀️
              ▶️assert x > 0 : \"x should be positive\";◀️
              ▶️throw new RuntimeException(\"oops\");◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_for_header_is_not_a_statement() {
    assert_statements(
      "java",
      "
      ▶️public class BreakSample {
          ▶️public static void main(String[] args) ▶️{
              ▶️for (int i = 0; i < 10; i++) ▶️{
                  ▶️if (i == 5) ▶️{
                      ▶️break;◀️
                  }◀️◀️
              }◀️◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_do_while() {
    assert_statements(
      "java",
      "
      ▶️public class DoWhileSample {
          ▶️public static void main(String[] args) ▶️{
              ▶️int i = 0;◀️
              ▶️do ▶️{
                  ▶️i++;◀️
              }◀️ while (i < 10);◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_labeled_block() {
    assert_statements(
      "java",
      "
      ▶️public class LabelSample {
          ▶️public static void main(String[] args) ▶️{
              ▶️myLabel: ▶️{
                  ▶️int x = 1;◀️
              }◀️◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_switch() {
    assert_statements(
      "java",
      "
      ▶️public class SwitchSample {
          ▶️public static void main(String[] args) ▶️{
              ▶️switch (test) {
                  case 0:
                      ▶️System.out.println(\"zero\");◀️
                      ▶️break;◀️
                  default:
                      ▶️break;◀️
              }◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_synchronized_and_try() {
    assert_statements(
      "java",
      "
      ▶️public class TrySample {
          ▶️public static void main(String[] args) ▶️{
              ▶️synchronized (TrySample.class) ▶️{
                  ▶️counter++;◀️
              }◀️◀️
              ▶️try ▶️{
                  ▶️int result = 10 / 0;◀️
              }◀️ catch (ArithmeticException e) ▶️{
                  ▶️System.out.println(\"Cannot divide by zero\");◀️
              }◀️◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_try_with_resources() {
    assert_statements(
      "java",
      "
      ▶️public class TrySample {
          ▶️public static void main(String[] args) ▶️{
              ▶️try (BufferedReader br = new BufferedReader()) ▶️{
                  ▶️int result = 10 / 0;◀️
              }◀️ catch (ArithmeticException e) ▶️{
                  ▶️System.out.println(\"Cannot divide by zero\");◀️
              }◀️◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_type_declarations() {
    assert_statements(
      "java",
      "
      ▶️import java.util.List;◀️
      ▶️public interface Animal {
          ▶️void makeSound();◀️
      }◀️
      ▶️public record Point(int x, int y) {}◀️
      ",
    );
    assert_statements(
      "java",
      "
      ▶️public class OuterSample {
          ▶️public static int x = 0;◀️
          ▶️public enum Day {
              MONDAY, TUESDAY
          }◀️
          ▶️public @interface MyAnnotation {
          }◀️
          ▶️public class InnerSample {
              ▶️public static void innerMethod() ▶️{
                  ▶️int y = 0;◀️
              }◀️◀️
          }◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_constructors_and_initializers() {
    assert_statements(
      "java",
      "
      ▶️public class MyClass {
          ▶️static int count;◀️
          ▶️static ▶️{
              ▶️count = 100;◀️
          }◀️◀️
          ▶️public MyClass() {
              ▶️int x = 0;◀️
          }◀️
      }◀️
      ",
    );
    assert_statements(
      "java",
      "
      ▶️public record Person(String firstName, String lastName) {
          ▶️public Person ▶️{
              ▶️firstName = firstName;◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_single_line_if() {
    assert_statements(
      "java",
      "
      ▶️public class SingleLineIfSample {
          ▶️public static void main(String[] args) ▶️{
              ▶️if (x == 5) y = 0;◀️
              ▶️if (x == 5) ▶️{ ▶️y = 0;◀️ }◀️◀️
          }◀️◀️
      }◀️
      ",
    );
  }

  #[test]
  fn test_compound_flags() {
    assert_compound("java", "{\n\tint x = 1;\n}", true);
    assert_compound("java", "do {\n\tint x = 1;\n} while (true);", true);
    assert_compound("java", "for (int n : numbers) {\n\tint x = 1;\n}", true);
    assert_compound("java", "for (int i = 0; i < 10; i++) {\n\tint x = 1;\n}", true);
    assert_compound("java", "myLabel: {\n\tint x = 1;\n}", true);
    assert_compound("java", "while (true) {\n\tint x = 1;\n}", true);
    assert_compound("java", "public interface InnerInterface {\n\tvoid innerMethod();\n}", true);
    assert_compound("java", "class MyClass {\n\t❚public MyClass() {\n\t\tint x = 0;\n\t}\n}", true);
    assert_compound("java", "int x = 1;", false);
  }
}
